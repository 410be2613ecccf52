//! Demo CLI command.
//!
//! Runs a scripted scenario against the in-process toolkit: it builds a
//! workbench with an expand bar, expands and collapses its sections, clicks a
//! button that opens a dialog after a delay, and waits for that dialog with the
//! new-shell condition.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use colored::Colorize;
use parking_lot::Mutex;

use crate::automation::Automation;
use crate::condition::ShellIsClosed;
use crate::config;
use crate::core::Result;
use crate::exec::SyncExecutor;
use crate::toolkit::{Button, EventType, ExpandItem, Shell, Ui};

/// Section labels of the demo expand bar.
const SECTIONS: &[&str] = &["General", "Appearance", "Advanced"];

/// Arguments of the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Wait timeout in milliseconds. Overrides the configured value.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Delay in milliseconds between the click and the dialog opening.
    #[arg(long, value_name = "MS", default_value_t = 300)]
    pub dialog_delay_ms: u64,
}

/// Widgets of the demo workbench.
struct Workbench {
    shell: Shell,
    sections: Vec<ExpandItem>,
    open_button: Button,
}

/// Execute the demo command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or a step of the
/// scenario fails.
pub fn execute(args: &DemoArgs) -> Result<()> {
    let (mut config, path) = config::load_or_default()?;
    if let Some(timeout_ms) = args.timeout_ms {
        config.wait.timeout_ms = timeout_ms;
    }
    if let Some(path) = path {
        step(&format!("Loaded configuration from {}", path.display()));
    }

    let automation = Automation::launch(config)?;
    let result = run_scenario(&automation, Duration::from_millis(args.dialog_delay_ms));
    automation.shutdown();
    result
}

fn run_scenario(automation: &Automation, dialog_delay: Duration) -> Result<()> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let exec = automation.exec().clone();
    let sink = Arc::clone(&events);
    let workbench = automation
        .exec()
        .try_run(move |ui| build_workbench(ui, &exec, dialog_delay, &sink))?;
    step(&format!("Opened {}", automation.shells().title(workbench.shell)?.bold()));

    for section in &workbench.sections {
        automation.expand(*section)?;
        step(&format!("Expanded {}", automation.expand_handler().text(*section)?));
    }

    // Already expanded: no event, no change.
    automation.expand(workbench.sections[0])?;
    step("Expanding an expanded section again changed nothing");

    automation.collapse(workbench.sections[0])?;
    step(&format!("Collapsed {}", automation.expand_handler().text(workbench.sections[0])?));

    let widgets = automation.widgets();
    let dialog =
        automation.wait_for_new_shell(workbench.shell, || widgets.select(workbench.open_button))?;
    if let Some(dialog) = dialog {
        step(&format!("Dialog {} opened", automation.shells().title(dialog)?.bold()));

        automation.exec().try_run(move |ui| ui.close_shell(dialog))?;
        automation.wait_until(ShellIsClosed::new(automation.shells().clone(), dialog)).run()?;
        step("Dialog closed");
    }

    println!();
    println!("{}", "Expand bar events:".bold());
    for event in events.lock().iter() {
        println!("  {}", event.dimmed());
    }

    Ok(())
}

/// Builds the workbench on the UI thread.
///
/// The expand bar records every expand and collapse notification it receives,
/// along with the item's state at that moment. The button opens the dialog from
/// a helper thread after `dialog_delay`, the way a slow application would.
fn build_workbench(
    ui: &Ui,
    exec: &SyncExecutor,
    dialog_delay: Duration,
    events: &Arc<Mutex<Vec<String>>>,
) -> Result<Workbench> {
    let shell = ui.open_shell("Workbench");
    let bar = ui.create_expand_bar(shell)?;
    ui.set_tooltip_text(bar, Some("Settings sections"))?;

    let sections = SECTIONS
        .iter()
        .map(|label| ui.create_expand_item(bar, label))
        .collect::<Result<Vec<_>>>()?;

    for kind in [EventType::Expand, EventType::Collapse] {
        let events = Arc::clone(events);
        ui.add_listener(bar, kind, move |ui, event| {
            let Some(item) = event.item else { return };
            let label = ui.text(item).unwrap_or_default();
            let expanded = ui.expanded(item).unwrap_or_default();
            let kind = event.kind.to_string();
            events.lock().push(format!("{kind:<8} {label:<12} expanded={expanded}"));
        })?;
    }

    let open_button = ui.create_button(shell, "Preferences...")?;
    let exec = exec.clone();
    ui.add_listener(open_button, EventType::Selection, move |_, _| {
        let exec = exec.clone();
        std::thread::spawn(move || {
            std::thread::sleep(dialog_delay);
            if let Err(err) = exec.run_later(|ui| {
                ui.open_shell("Preferences");
            }) {
                tracing::warn!(%err, "could not open the dialog");
            }
        });
    })?;

    Ok(Workbench {
        shell,
        sections,
        open_button,
    })
}

fn step(message: &str) { println!("{} {message}", "✓".green()); }
