//! 選択集合
//!
//! `id` で一意な作品の集合。挿入順を保持し、合成時は先に入っていた要素を優先する
//! （後から来た同じ `id` は捨てる。上書きはしない）。

use crate::types::Artwork;
use std::collections::HashSet;

/// 選択中の作品（`id` で一意）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    records: Vec<Artwork>,
    ids: HashSet<u64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 重複を除去して集合を作る（先勝ち）
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Artwork>,
    {
        let mut set = Self::new();
        set.merge(records);
        set
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Artwork> {
        self.records
    }

    /// 末尾に追加。既存の `id` は残し、入ってきた側を捨てる
    ///
    /// # Returns
    /// 実際に追加された件数
    pub fn merge<I>(&mut self, incoming: I) -> usize
    where
        I: IntoIterator<Item = Artwork>,
    {
        let before = self.records.len();
        for artwork in incoming {
            if self.ids.insert(artwork.id) {
                self.records.push(artwork);
            }
        }
        self.records.len() - before
    }

    /// 先頭に追加。既存の要素は位置も含めてそのまま残る
    ///
    /// # Returns
    /// 実際に追加された件数
    pub fn prepend<I>(&mut self, incoming: I) -> usize
    where
        I: IntoIterator<Item = Artwork>,
    {
        let mut head = Vec::new();
        for artwork in incoming {
            if self.ids.insert(artwork.id) {
                head.push(artwork);
            }
        }
        let added = head.len();
        head.append(&mut self.records);
        self.records = head;
        added
    }

    pub fn remove(&mut self, id: u64) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.records.retain(|a| a.id != id);
        true
    }

    /// 選択/解除を切り替え
    ///
    /// # Returns
    /// 切り替え後に選択されていればtrue
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        if self.remove(artwork.id) {
            false
        } else {
            self.merge([artwork.clone()]);
            true
        }
    }

    /// 指定ページの行をすべて解除
    pub fn remove_all(&mut self, records: &[Artwork]) -> usize {
        let page_ids: HashSet<u64> = records.iter().map(|a| a.id).collect();
        let before = self.records.len();
        self.records.retain(|a| !page_ids.contains(&a.id));
        self.ids.retain(|id| !page_ids.contains(id));
        before - self.records.len()
    }

    /// 指定行がすべて選択済みか（空ならfalse）
    pub fn contains_all(&self, records: &[Artwork]) -> bool {
        !records.is_empty() && records.iter().all(|a| self.contains(a.id))
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: u64, title: &str) -> Artwork {
        Artwork {
            id,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_records_dedup_first_wins() {
        let set = SelectionSet::from_records(vec![
            artwork(1, "first"),
            artwork(2, "two"),
            artwork(1, "second"),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].title, "first");
    }

    #[test]
    fn test_merge_keeps_existing_entry() {
        let mut set = SelectionSet::from_records(vec![artwork(1, "old")]);
        let added = set.merge(vec![artwork(1, "new"), artwork(2, "two")]);
        assert_eq!(added, 1);
        assert_eq!(set.records()[0].title, "old");
        assert_eq!(set.records()[1].id, 2);
    }

    #[test]
    fn test_prepend_places_new_records_first() {
        let mut set = SelectionSet::from_records(vec![artwork(10, "ten")]);
        let added = set.prepend(vec![artwork(1, "one"), artwork(2, "two")]);
        assert_eq!(added, 2);
        let ids: Vec<u64> = set.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }

    #[test]
    fn test_prepend_does_not_displace_existing() {
        let mut set = SelectionSet::from_records(vec![artwork(5, "kept"), artwork(6, "six")]);
        set.prepend(vec![artwork(1, "one"), artwork(5, "dup")]);
        let ids: Vec<u64> = set.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 5, 6]);
        assert_eq!(set.records()[1].title, "kept");
    }

    #[test]
    fn test_toggle() {
        let mut set = SelectionSet::new();
        let a = artwork(3, "three");
        assert!(set.toggle(&a));
        assert!(set.contains(3));
        assert!(!set.toggle(&a));
        assert!(!set.contains(3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_all_only_page_rows() {
        let mut set = SelectionSet::from_records((1..=5).map(|i| artwork(i, "")));
        let page = vec![artwork(2, ""), artwork(4, ""), artwork(99, "")];
        assert_eq!(set.remove_all(&page), 2);
        let ids: Vec<u64> = set.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert!(!set.contains(2));
    }

    #[test]
    fn test_contains_all() {
        let set = SelectionSet::from_records(vec![artwork(1, ""), artwork(2, "")]);
        assert!(set.contains_all(&[artwork(1, ""), artwork(2, "")]));
        assert!(!set.contains_all(&[artwork(1, ""), artwork(3, "")]));
        assert!(!set.contains_all(&[]));
    }

    #[test]
    fn test_clear() {
        let mut set = SelectionSet::from_records(vec![artwork(1, "")]);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(1));
    }
}
