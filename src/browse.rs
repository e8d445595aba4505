//! 対話式のページ閲覧・選択
//!
//! 1ページずつ取得して表示し、メニューから選択操作を行う。
//! 一括選択の保留分は「次へ」で移動した直後のページに適用される。

use crate::cli::ExportFormat;
use crate::client::CatalogClient;
use crate::error::Result;
use crate::export;
use crate::render;
use artwork_select_common::{Artwork, FetchTicket, LoadOutcome, Pager, SelectionState, MAX_BULK_SELECT, PAGE_SIZE};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Next,
    Prev,
    Jump,
    /// 行ごとの選択切り替え
    ToggleRows,
    /// 先頭N件を選択
    BulkSelect,
    SelectPage,
    DeselectPage,
    ShowSelection,
    ClearSelection,
    /// 失敗したページを再取得
    Retry,
    /// 選択結果を保存して終了
    SaveAndQuit,
    Quit,
}

impl BrowseAction {
    pub fn label(&self) -> &'static str {
        match self {
            BrowseAction::Next => "次のページ",
            BrowseAction::Prev => "前のページ",
            BrowseAction::Jump => "ページ指定",
            BrowseAction::ToggleRows => "行を選択/解除",
            BrowseAction::BulkSelect => "先頭N件を選択",
            BrowseAction::SelectPage => "このページをすべて選択",
            BrowseAction::DeselectPage => "このページの選択をすべて解除",
            BrowseAction::ShowSelection => "選択一覧を表示",
            BrowseAction::ClearSelection => "選択をすべて解除",
            BrowseAction::Retry => "再読み込み",
            BrowseAction::SaveAndQuit => "保存して終了",
            BrowseAction::Quit => "終了",
        }
    }
}

/// 表示中ページから作るページ送り
///
/// 総ページ数が不明なら、満杯のページの次は存在するとみなす
pub fn pager_for(state: &SelectionState) -> Option<Pager> {
    let current = state.displayed_page()?;
    let total = state.total_pages().unwrap_or_else(|| {
        if state.records().len() >= PAGE_SIZE {
            current + 1
        } else {
            current
        }
    });
    Some(Pager::new(current, total))
}

/// 現在の状態で選べる操作
pub fn available_actions(state: &SelectionState) -> Vec<BrowseAction> {
    let mut actions = Vec::new();

    if state.load_error().is_some() {
        actions.push(BrowseAction::Retry);
    }

    if let Some(pager) = pager_for(state) {
        if pager.next().is_some() {
            actions.push(BrowseAction::Next);
        }
        if pager.prev().is_some() {
            actions.push(BrowseAction::Prev);
        }
        if pager.total_pages() > 1 {
            actions.push(BrowseAction::Jump);
        }
    }

    if !state.records().is_empty() {
        actions.push(BrowseAction::ToggleRows);
        if state.can_bulk_select() {
            actions.push(BrowseAction::BulkSelect);
        }
        if state.all_visible_selected() {
            actions.push(BrowseAction::DeselectPage);
        } else {
            actions.push(BrowseAction::SelectPage);
        }
    }

    if !state.selection().is_empty() {
        actions.push(BrowseAction::ShowSelection);
        actions.push(BrowseAction::ClearSelection);
        actions.push(BrowseAction::SaveAndQuit);
    }

    actions.push(BrowseAction::Quit);
    actions
}

pub struct BrowseOptions {
    pub start_page: u32,
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
    pub title: String,
}

pub async fn run_browse(client: &CatalogClient, options: BrowseOptions) -> Result<()> {
    let mut state = SelectionState::new();

    let ticket = state.navigate(options.start_page);
    fetch_into(client, &mut state, ticket).await;

    loop {
        render::print_page(&state);

        let actions = available_actions(&state);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            BrowseAction::Next | BrowseAction::Prev => {
                let target = pager_for(&state).and_then(|p| {
                    if actions[choice] == BrowseAction::Next {
                        p.next()
                    } else {
                        p.prev()
                    }
                });
                if let Some(page) = target {
                    let ticket = state.navigate(page);
                    fetch_into(client, &mut state, ticket).await;
                }
            }
            BrowseAction::Jump => {
                if let Some(page) = prompt_jump(&state)? {
                    let ticket = state.navigate(page);
                    fetch_into(client, &mut state, ticket).await;
                }
            }
            BrowseAction::ToggleRows => prompt_toggle_rows(&mut state)?,
            BrowseAction::BulkSelect => {
                let input: String = Input::new()
                    .with_prompt(format!("選択する件数 (1-{})", MAX_BULK_SELECT))
                    .allow_empty(true)
                    .interact_text()?;
                match state.request_bulk_select_input(&input) {
                    Ok(summary) if summary.pending.is_pending() => println!(
                        "✔ {}件選択中（次ページで残り{}件を選択）",
                        summary.selected,
                        summary.pending.remaining()
                    ),
                    Ok(summary) => println!("✔ {}件選択中", summary.selected),
                    Err(e) => println!("✖ {}", e),
                }
            }
            BrowseAction::SelectPage => {
                let added = state.select_visible();
                println!("✔ {}件追加", added);
            }
            BrowseAction::DeselectPage => {
                let removed = state.deselect_visible();
                println!("✔ {}件解除", removed);
            }
            BrowseAction::ShowSelection => {
                println!("\n選択中: {}件", state.selection().len());
                render::print_records(state.selection().records());
            }
            BrowseAction::ClearSelection => {
                if Confirm::new()
                    .with_prompt("選択をすべて解除しますか?")
                    .default(false)
                    .interact()?
                {
                    state.clear_selection();
                    println!("✔ 選択を解除しました");
                }
            }
            BrowseAction::Retry => {
                if let Some(ticket) = state.retry() {
                    fetch_into(client, &mut state, ticket).await;
                }
            }
            BrowseAction::SaveAndQuit => {
                let output = options.output.clone().unwrap_or_else(|| PathBuf::from("."));
                export::export_selection(
                    state.selection().records(),
                    options.format,
                    &output,
                    &options.title,
                )?;
                println!("\n✅ {}件を保存しました", state.selection().len());
                return Ok(());
            }
            BrowseAction::Quit => {
                if state.selection().is_empty()
                    || Confirm::new()
                        .with_prompt("選択を保存せずに終了しますか?")
                        .default(false)
                        .interact()?
                {
                    return Ok(());
                }
            }
        }
    }
}

/// ページを取得して状態に反映。失敗は状態に記録する
async fn fetch_into(client: &CatalogClient, state: &mut SelectionState, ticket: FetchTicket) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("ページ {} を読み込み中...", ticket.page));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.fetch_page(ticket.page).await;
    spinner.finish_and_clear();

    match result {
        Ok(page) => match state.complete_fetch(ticket, page) {
            LoadOutcome::Displayed { page, auto_selected } if auto_selected > 0 => {
                println!("✔ ページ{}の先頭{}件を自動選択しました", page, auto_selected);
            }
            LoadOutcome::Displayed { .. } => {}
            LoadOutcome::Discarded { page } => debug!(page, "discarded stale page"),
        },
        Err(e) => {
            state.fail_fetch(ticket, &e);
        }
    }
}

fn prompt_jump(state: &SelectionState) -> Result<Option<u32>> {
    let Some(pager) = pager_for(state) else {
        return Ok(None);
    };
    let page: u32 = Input::new()
        .with_prompt(format!("ページ番号 (1-{})", pager.total_pages()))
        .default(pager.current())
        .interact_text()?;

    match pager.jump(page) {
        Some(page) if page != pager.current() => Ok(Some(page)),
        Some(_) => Ok(None),
        None => {
            println!("✖ 範囲外のページです");
            Ok(None)
        }
    }
}

/// チェック状態を表示中ページへ反映
fn prompt_toggle_rows(state: &mut SelectionState) -> Result<()> {
    let records = state.records().to_vec();
    let items: Vec<String> = records.iter().map(|a| render::row_line(a, None)).collect();
    let defaults: Vec<bool> = records.iter().map(|a| state.is_selected(a.id)).collect();

    let checked = MultiSelect::new()
        .with_prompt("スペースで切り替え、Enterで確定")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    let chosen = apply_row_choice(state.selection().records(), &records, &checked);
    state.replace_selection(chosen);
    Ok(())
}

/// 表示中ページのチェック結果から選択全体の新しい値を作る
///
/// 他ページの選択と、チェックが残った行は元の位置のまま。
/// 新たにチェックした行は末尾に追加する。
pub fn apply_row_choice(selected: &[Artwork], page: &[Artwork], checked: &[usize]) -> Vec<Artwork> {
    let checked_ids: HashSet<u64> = checked
        .iter()
        .filter_map(|&i| page.get(i))
        .map(|a| a.id)
        .collect();
    let page_ids: HashSet<u64> = page.iter().map(|a| a.id).collect();

    let mut result: Vec<Artwork> = selected
        .iter()
        .filter(|a| !page_ids.contains(&a.id) || checked_ids.contains(&a.id))
        .cloned()
        .collect();
    let kept: HashSet<u64> = result.iter().map(|a| a.id).collect();
    result.extend(
        page.iter()
            .filter(|a| checked_ids.contains(&a.id) && !kept.contains(&a.id))
            .cloned(),
    );
    result
}
