//! Terminal region picker
//!
//! [`TerminalRegionPicker`] is the [`RegionPicker`] a flow talks to. It only
//! publishes what should be shown; [`drive_region_prompt`] watches that view,
//! runs the interactive prompt and reports the choice back to the flow.

use crate::digitalocean::RegionId;
use crate::error::Result;
use crate::flow::{Location, RegionPicker, SelectionHandle};
use crate::localize::Localize;
use crate::wizard::render::{display_header, wizard_render_config};
use colored::Colorize;
use inquire::{InquireError, Select};
use std::fmt;
use tokio::sync::watch;

/// What the picker currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerView {
    Loading,
    Ready(Vec<Location>),
}

pub struct TerminalRegionPicker {
    view: watch::Sender<PickerView>,
}

impl Default for TerminalRegionPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRegionPicker {
    pub fn new() -> Self {
        let (view, _) = watch::channel(PickerView::Loading);
        Self { view }
    }

    pub fn subscribe(&self) -> watch::Receiver<PickerView> {
        self.view.subscribe()
    }

    pub fn view(&self) -> PickerView {
        self.view.borrow().clone()
    }
}

impl RegionPicker for TerminalRegionPicker {
    fn reset(&self) {
        self.view.send_replace(PickerView::Loading);
    }

    fn set_locations(&self, locations: Vec<Location>) {
        log::debug!("Picker received {} locations", locations.len());
        self.view.send_replace(PickerView::Ready(locations));
    }
}

/// Wrapper for displaying locations in the selection menu
struct LocationOption {
    location: Location,
}

impl fmt::Display for LocationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let region = self
            .location
            .id
            .as_ref()
            .map(RegionId::to_string)
            .unwrap_or_default();
        write!(f, "{}  {}", self.location.name.cyan(), region.dimmed())
    }
}

/// Wait for the picker to be populated, prompt for a location and hand the
/// choice to the flow
///
/// Returns the delivered region, or `None` when nothing could be selected,
/// the user cancelled, or no flow was waiting any more.
pub async fn drive_region_prompt(
    mut view: watch::Receiver<PickerView>,
    selection: SelectionHandle,
    localizer: &impl Localize,
) -> Result<Option<RegionId>> {
    let locations = loop {
        let ready = match &*view.borrow_and_update() {
            PickerView::Ready(locations) => Some(locations.clone()),
            PickerView::Loading => None,
        };
        if let Some(locations) = ready {
            break locations;
        }
        if view.changed().await.is_err() {
            return Ok(None);
        }
    };

    display_header(
        &localizer.localize("region-picker-title", &[]),
        &localizer.localize("region-picker-description", &[]),
    );

    let (available, unavailable): (Vec<Location>, Vec<Location>) =
        locations.into_iter().partition(|l| l.available);

    if !unavailable.is_empty() {
        let names: Vec<&str> = unavailable.iter().map(|l| l.name.as_str()).collect();
        println!("  {} {}\n", "Unavailable:".dimmed(), names.join(", ").dimmed());
    }

    if available.is_empty() {
        println!(
            "{} {}",
            "⚠".yellow(),
            localizer.localize("region-picker-unavailable", &[])
        );
        return Ok(None);
    }

    let message = localizer.localize("region-picker-prompt", &[]);
    let options: Vec<LocationOption> = available
        .into_iter()
        .map(|location| LocationOption { location })
        .collect();

    let answer = tokio::task::spawn_blocking(move || {
        Select::new(&message, options)
            .with_render_config(wizard_render_config())
            .with_help_message("Use ↑/↓ to navigate, Enter to select")
            .prompt()
    })
    .await?;

    let chosen = match answer {
        Ok(option) => option.location,
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let Some(region_id) = chosen.id else {
        return Ok(None);
    };

    println!(
        "\n{} Selected location: {} ({})",
        "✓".green(),
        chosen.name.cyan(),
        region_id
    );

    if selection.region_selected(region_id.clone()) {
        Ok(Some(region_id))
    } else {
        Ok(None)
    }
}
