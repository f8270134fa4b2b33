//! Modal confirm and message dialogs.
//!
//! A dialog carries a `purpose` record so one response path can serve
//! every question a screen asks: the screen matches on the purpose it gets
//! back together with the [`DialogOutcome`].

use crate::keymap::Action;
use crate::screens::RenderContext;
use crate::widgets::{Dialog, DialogVariant};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::fmt::Debug;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Yes / No
    Confirm,
    /// A single OK button
    Message,
}

/// How a dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog<T> {
    pub purpose: T,
    pub title: String,
    pub body: String,
    pub kind: DialogKind,
    pub variant: DialogVariant,
    /// Yes is selected (ignored for messages)
    yes_selected: bool,
}

impl<T> ConfirmDialog<T> {
    pub fn confirm(purpose: T, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            purpose,
            title: title.into(),
            body: body.into(),
            kind: DialogKind::Confirm,
            variant: DialogVariant::Default,
            yes_selected: true,
        }
    }

    pub fn message(purpose: T, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Message,
            ..Self::confirm(purpose, title, body)
        }
    }

    /// Warning styling, with No preselected
    pub fn destructive(mut self) -> Self {
        self.variant = DialogVariant::Warning;
        self.yes_selected = false;
        self
    }

    pub fn yes_selected(&self) -> bool {
        self.yes_selected
    }

    /// Apply one key action; returns the outcome once the dialog closes
    pub fn handle_action(&mut self, action: Action) -> Option<DialogOutcome> {
        match (self.kind, action) {
            (DialogKind::Message, Action::Confirm | Action::Cancel | Action::Yes) => {
                Some(DialogOutcome::Confirmed)
            }
            (DialogKind::Message, _) => None,
            (DialogKind::Confirm, Action::Yes) => Some(DialogOutcome::Confirmed),
            (DialogKind::Confirm, Action::No | Action::Cancel) => Some(DialogOutcome::Cancelled),
            (DialogKind::Confirm, Action::Confirm) => Some(if self.yes_selected {
                DialogOutcome::Confirmed
            } else {
                DialogOutcome::Cancelled
            }),
            (DialogKind::Confirm, Action::MoveLeft | Action::MoveRight | Action::Toggle) => {
                self.yes_selected = !self.yes_selected;
                None
            }
            (DialogKind::Confirm, _) => None,
        }
    }
}

/// The single dialog slot of a screen.
///
/// At most one dialog is open at a time. Opening another while one is
/// showing is ignored.
#[derive(Debug, Clone)]
pub struct Modal<T> {
    active: Option<ConfirmDialog<T>>,
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Debug> Modal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `dialog`; returns false if another one is already open
    pub fn open(&mut self, dialog: ConfirmDialog<T>) -> bool {
        if let Some(current) = &self.active {
            debug!(
                "dialog: ignoring {:?} while {:?} is open",
                dialog.purpose, current.purpose
            );
            return false;
        }
        debug!("dialog: open {:?}", dialog.purpose);
        self.active = Some(dialog);
        true
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn current(&self) -> Option<&ConfirmDialog<T>> {
        self.active.as_ref()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Feed an action to the open dialog. When it closes, returns its
    /// purpose and how it was closed.
    pub fn handle(&mut self, action: Option<Action>) -> Option<(T, DialogOutcome)> {
        let dialog = self.active.as_mut()?;
        let outcome = dialog.handle_action(action?)?;
        let dialog = self.active.take()?;
        debug!("dialog: {:?} -> {:?}", dialog.purpose, outcome);
        Some((dialog.purpose, outcome))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let Some(dialog) = &self.active else {
            return;
        };
        let yes = ctx.text("dialog.yes");
        let no = ctx.text("dialog.no");
        let ok = ctx.text("dialog.ok");
        let buttons: Vec<(&str, bool)> = match dialog.kind {
            DialogKind::Confirm => vec![
                (yes.as_str(), dialog.yes_selected),
                (no.as_str(), !dialog.yes_selected),
            ],
            DialogKind::Message => vec![(ok.as_str(), true)],
        };
        let widget = Dialog::new(&dialog.title, &dialog.body)
            .variant(dialog.variant)
            .buttons(buttons);
        frame.render_widget(widget, area);
    }
}
