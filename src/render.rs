//! ページ・選択状態の端末表示

use artwork_select_common::{Artwork, Pager, SelectionState};

const TITLE_WIDTH: usize = 40;
const ORIGIN_WIDTH: usize = 16;
const ARTIST_WIDTH: usize = 32;

/// 1行目だけを幅に収める（超えたら末尾を `…`）
pub fn truncate(text: &str, width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    if first_line.chars().count() <= width {
        return first_line.to_string();
    }
    let mut cut: String = first_line.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// 制作年の表示（同年なら1つ、不明なら空）
pub fn format_dates(artwork: &Artwork) -> String {
    match (artwork.date_start, artwork.date_end) {
        (0, 0) => String::new(),
        (start, end) if start == end || end == 0 => start.to_string(),
        (start, end) => format!("{}–{}", start, end),
    }
}

/// 作品1行。`selected` がSomeならチェック欄を付ける
pub fn row_line(artwork: &Artwork, selected: Option<bool>) -> String {
    let check = match selected {
        Some(true) => "[x] ",
        Some(false) => "[ ] ",
        None => "",
    };
    format!(
        "{}{:>7}  {:<title$}  {:<origin$}  {:<artist$}  {}",
        check,
        artwork.id,
        truncate(&artwork.title, TITLE_WIDTH),
        truncate(&artwork.place_of_origin, ORIGIN_WIDTH),
        truncate(&artwork.artist_display, ARTIST_WIDTH),
        format_dates(artwork),
        title = TITLE_WIDTH,
        origin = ORIGIN_WIDTH,
        artist = ARTIST_WIDTH,
    )
}

/// ページ番号・選択件数・保留件数
pub fn status_line(state: &SelectionState) -> String {
    let page = match (state.displayed_page(), state.total_pages()) {
        (Some(current), Some(total)) => {
            let pager = Pager::new(current, total);
            let first = pager.first_offset() + 1;
            let last = pager.first_offset() + state.records().len() as u64;
            format!(
                "ページ {}/{} ({}〜{}件目)",
                pager.current(),
                pager.total_pages(),
                first,
                last
            )
        }
        (Some(current), None) => format!("ページ {}", current),
        (None, _) => "ページ未読み込み".to_string(),
    };

    let mut line = format!("{} | 選択中: {}件", page, state.selection().len());
    if state.pending().is_pending() {
        line.push_str(&format!(" | 次ページで +{}件", state.pending().remaining()));
    }
    line
}

/// 表示中ページの行（チェック欄付き）
pub fn page_lines(state: &SelectionState) -> Vec<String> {
    state
        .records()
        .iter()
        .map(|a| row_line(a, Some(state.is_selected(a.id))))
        .collect()
}

pub fn print_page(state: &SelectionState) {
    println!("\n{}", status_line(state));
    println!("---");
    for line in page_lines(state) {
        println!("{}", line);
    }
    if let Some(error) = state.load_error() {
        println!("---");
        println!("✖ 読み込み失敗: {}", error);
    }
    println!("---");
}

pub fn print_records(records: &[Artwork]) {
    for artwork in records {
        println!("{}", row_line(artwork, None));
    }
}
