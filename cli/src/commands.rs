//! Subcommand bodies, written against an output sink so they can be tested
//! without a terminal.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;

use chatlog::{
    Clock, DEFAULT_KEY, Message, MessageLog, QUICK_RESPONSES, SendOutcome, StudentView, VolunteerView,
    student_alias, volunteer_alias,
};
use rand::Rng;
use time::UtcOffset;

use crate::CliError;
use crate::file_store::FileStore;

/// Who a `send` speaks as.
#[derive(Debug, Clone, Default)]
pub struct SendAs {
    pub volunteer: bool,
    /// Volunteers must opt in to sending; students ignore this.
    pub online: bool,
    /// Fixed alias instead of a random one.
    pub alias: Option<String>,
}

fn log_for(store: &FileStore) -> MessageLog<FileStore> {
    MessageLog::with_default_key(store.clone())
}

/// Seed the welcome message if the log is empty.
pub fn init(store: &FileStore, clock: &dyn Clock, out: &mut impl Write) -> Result<(), CliError> {
    let messages = log_for(store).initialize_if_empty(clock)?;
    writeln!(out, "{} message(s) in {}", messages.len(), store.path_for(DEFAULT_KEY)?.display())?;
    Ok(())
}

/// Print the log as text lines, or as the stored JSON array.
pub fn show(store: &FileStore, offset: UtcOffset, json: bool, out: &mut impl Write) -> Result<(), CliError> {
    let messages = log_for(store).load();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&messages)?)?;
        return Ok(());
    }
    if messages.is_empty() {
        writeln!(out, "(no messages)")?;
    }
    for message in &messages {
        writeln!(out, "{}", render_line(message, offset))?;
    }
    Ok(())
}

/// Append one message through the same view rules as the browser pages.
pub fn send<C: Clock + 'static>(
    store: &FileStore,
    clock: C,
    text: &str,
    who: SendAs,
    rng: &mut impl Rng,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let outcome = if who.volunteer {
        let alias = who.alias.unwrap_or_else(|| volunteer_alias(rng));
        let mut view = VolunteerView::mount(log_for(store), alias, clock);
        if who.online {
            view.toggle_online();
        }
        view.send(text)?
    } else {
        let alias = who.alias.unwrap_or_else(|| student_alias(rng));
        StudentView::mount(log_for(store), alias, clock).send(text)?
    };
    report(&outcome, out)
}

/// List the canned replies, or send reply `index` (1-based) as an online volunteer.
pub fn quick<C: Clock + 'static>(
    store: &FileStore,
    clock: C,
    index: Option<usize>,
    alias: Option<String>,
    rng: &mut impl Rng,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let Some(index) = index else {
        for (n, text) in VolunteerView::<FileStore>::quick_responses().iter().enumerate() {
            writeln!(out, "{}. {text}", n + 1)?;
        }
        return Ok(());
    };
    let canned = index
        .checked_sub(1)
        .and_then(|i| QUICK_RESPONSES.get(i))
        .ok_or(CliError::UnknownQuickResponse { index, count: QUICK_RESPONSES.len() })?;

    let alias = alias.unwrap_or_else(|| volunteer_alias(rng));
    let mut view = VolunteerView::mount(log_for(store), alias, clock);
    view.toggle_online();
    view.use_quick_response(canned);
    let outcome = view.send_draft()?;
    report(&outcome, out)
}

/// Remove the stored log. Open browser tabs keep their copies until reload.
pub fn clear(store: &FileStore, out: &mut impl Write) -> Result<(), CliError> {
    if store.remove(DEFAULT_KEY)? {
        writeln!(out, "cleared")?;
    } else {
        writeln!(out, "already empty")?;
    }
    Ok(())
}

fn report(outcome: &SendOutcome, out: &mut impl Write) -> Result<(), CliError> {
    match outcome {
        SendOutcome::Sent(message) => writeln!(out, "sent as {} (id {})", message.sender, message.id)?,
        SendOutcome::Ignored => writeln!(out, "nothing sent: message is blank")?,
    }
    Ok(())
}

/// `[HH:MM] sender: text`, with volunteer messages tagged.
pub fn render_line(message: &Message, offset: UtcOffset) -> String {
    let tag = if message.is_volunteer { " (Voluntário)" } else { "" };
    format!("[{}] {}{tag}: {}", message.clock_label(offset), message.sender, message.text)
}
