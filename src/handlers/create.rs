use crate::config::types::Config;
use crate::error::{DoCreateError, Result};
use crate::flow::{localized_city_name, RegionSelectionFlow};
use crate::handlers::utils::{build_account, load_catalog, print_server};
use crate::localize::Localize;
use crate::notification::TerminalNotifier;
use crate::wizard::{drive_region_prompt, PromptRetry, TerminalRegionPicker};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub async fn handle_create(
    config: &Config,
    token: Option<String>,
    json: bool,
    no_retry_prompt: bool,
) -> Result<()> {
    let account = build_account(config, token)?;
    let catalog = load_catalog(config)?;

    let retry = if no_retry_prompt || !config.ui.retry_prompt {
        PromptRetry::non_interactive()
    } else {
        PromptRetry::new(catalog.localize("retry-prompt", &[]))
    };

    let picker = TerminalRegionPicker::new();
    let view = picker.subscribe();
    let flow = RegionSelectionFlow::new(picker, TerminalNotifier, catalog);
    let selection = flow.selection_handle();

    let start = flow.start(&account, &retry);
    tokio::pin!(start);

    // The flow itself never gives up waiting; stop when the prompt does.
    let region_id = tokio::select! {
        result = &mut start => return print_server(&result?, json),
        chosen = drive_region_prompt(view, selection, flow.localizer()) => {
            chosen?.ok_or(DoCreateError::NoSelection)?
        }
    };

    let city = localized_city_name(flow.localizer(), &region_id.city_id());
    let spinner = creating_spinner(
        flow.localizer()
            .localize("creating-server", &[("serverLocation", &city)]),
    );
    let result = start.await;
    spinner.finish_and_clear();

    print_server(&result?, json)
}

fn creating_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
