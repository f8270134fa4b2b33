//! Stack-based screen navigation.
//!
//! The navigator owns one slot per registered [`ScreenId`]: a factory, the
//! built instance (if any) and its [`Lifecycle`]. The stack holds ids
//! only, so every screen exists at most once no matter how often it is
//! pushed.
//!
//! Every operation validates first and mutates second. A call that
//! returns an error leaves the stack and every lifecycle untouched.

mod error;
mod lifecycle;

pub use error::NavError;
pub use lifecycle::Lifecycle;

use crate::keymap::Action;
use crate::screens::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::collections::HashMap;
use tracing::{debug, info};

/// Builds a fresh screen instance
pub type ScreenFactory = Box<dyn Fn() -> Box<dyn Screen>>;

/// What happens to the screen leaving the top on pop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopPolicy {
    /// Keep the widget tree for a cheap return
    Retain,
    /// Tear the widget tree down
    Dispose,
}

/// Result of feeding one event through the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStatus {
    Continue,
    Exit,
}

struct Slot {
    factory: ScreenFactory,
    screen: Option<Box<dyn Screen>>,
    state: Lifecycle,
    builds: usize,
}

#[derive(Default)]
pub struct Navigator {
    slots: HashMap<ScreenId, Slot>,
    stack: Vec<ScreenId>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for a screen. Re-registering replaces the
    /// factory; an existing instance is kept until it is disposed.
    pub fn register<F>(&mut self, id: ScreenId, factory: F)
    where
        F: Fn() -> Box<dyn Screen> + 'static,
    {
        match self.slots.get_mut(&id) {
            Some(slot) => slot.factory = Box::new(factory),
            None => {
                self.slots.insert(
                    id,
                    Slot {
                        factory: Box::new(factory),
                        screen: None,
                        state: Lifecycle::Uninitialized,
                        builds: 0,
                    },
                );
            }
        }
        debug!("ui-nav: registered {}", id);
    }

    /// Build and show the root screen
    pub fn start(&mut self, root: ScreenId, ctx: &mut ScreenContext) -> Result<(), NavError> {
        self.ensure_registered(root)?;
        if let Some(&top) = self.stack.last() {
            return Err(NavError::State {
                id: root,
                state: self.state_of(top),
                op: "start with",
            });
        }
        self.activate(root, ctx);
        self.stack.push(root);
        info!("ui-nav: started at {}", root);
        Ok(())
    }

    /// Hide the current screen and show `id` on top of it
    pub fn push(&mut self, id: ScreenId, ctx: &mut ScreenContext) -> Result<(), NavError> {
        self.ensure_registered(id)?;
        self.ensure_not_stacked(id, "push")?;

        if let Some(&top) = self.stack.last() {
            self.deactivate(top, ctx);
        }
        self.activate(id, ctx);
        self.stack.push(id);
        debug!("ui-nav: push {} -> {:?}", id, self.stack);
        Ok(())
    }

    /// Remove the current screen and show the one beneath it. Returns the
    /// id that was popped.
    pub fn pop(&mut self, policy: PopPolicy, ctx: &mut ScreenContext) -> Result<ScreenId, NavError> {
        if self.stack.len() <= 1 {
            return Err(NavError::EmptyStack);
        }
        let Some(popped) = self.stack.pop() else {
            return Err(NavError::EmptyStack);
        };

        self.deactivate(popped, ctx);
        if policy == PopPolicy::Dispose {
            self.teardown(popped);
        }
        if let Some(&top) = self.stack.last() {
            self.activate(top, ctx);
        }
        debug!("ui-nav: pop {} ({:?}) -> {:?}", popped, policy, self.stack);
        Ok(popped)
    }

    /// Dispose every screen in `evict`, then push `id`.
    ///
    /// Screens in `evict` that were never built are skipped. Evicting a
    /// screen that is on the stack is a state error.
    pub fn replace(
        &mut self,
        evict: &[ScreenId],
        id: ScreenId,
        ctx: &mut ScreenContext,
    ) -> Result<(), NavError> {
        for &victim in evict {
            self.ensure_registered(victim)?;
            self.ensure_not_stacked(victim, "evict")?;
        }
        self.ensure_registered(id)?;
        self.ensure_not_stacked(id, "push")?;

        for &victim in evict {
            self.teardown(victim);
        }
        debug!("ui-nav: evicted {:?}", evict);
        self.push(id, ctx)
    }

    /// Dispose the current screen and show `id` in its place. The screen
    /// beneath is never shown in between.
    pub fn swap(&mut self, id: ScreenId, ctx: &mut ScreenContext) -> Result<(), NavError> {
        if self.stack.len() <= 1 {
            return Err(NavError::EmptyStack);
        }
        self.ensure_registered(id)?;
        let below = &self.stack[..self.stack.len() - 1];
        if below.contains(&id) {
            return Err(NavError::State {
                id,
                state: self.state_of(id),
                op: "swap to",
            });
        }

        let Some(top) = self.stack.pop() else {
            return Err(NavError::EmptyStack);
        };
        self.deactivate(top, ctx);
        self.teardown(top);
        self.activate(id, ctx);
        self.stack.push(id);
        debug!("ui-nav: swapped {} for {} -> {:?}", top, id, self.stack);
        Ok(())
    }

    /// Tear down a screen that is not on the stack. Never-built screens
    /// are left alone.
    pub fn dispose(&mut self, id: ScreenId) -> Result<(), NavError> {
        self.ensure_registered(id)?;
        self.ensure_not_stacked(id, "dispose")?;
        self.teardown(id);
        Ok(())
    }

    /// Top of the stack
    pub fn current(&self) -> Option<ScreenId> {
        self.stack.last().copied()
    }

    /// The top screen instance
    pub fn current_screen(&self) -> Option<&dyn Screen> {
        let top = self.current()?;
        self.slots.get(&top)?.screen.as_deref()
    }

    /// Root first, top last
    pub fn stack(&self) -> &[ScreenId] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// `None` for ids that were never registered
    pub fn lifecycle(&self, id: ScreenId) -> Option<Lifecycle> {
        self.slots.get(&id).map(|slot| slot.state)
    }

    /// How many times `set_up` ran for a screen
    pub fn build_count(&self, id: ScreenId) -> usize {
        self.slots.get(&id).map_or(0, |slot| slot.builds)
    }

    /// Route an event to the top screen and apply what it asks for.
    ///
    /// The force-quit binding is handled here so it works on every screen,
    /// modal dialogs included.
    pub fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<NavStatus> {
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press && ctx.keymap.action_for(key) == Some(Action::ForceQuit)
            {
                info!("ui-nav: force quit");
                return Ok(NavStatus::Exit);
            }
        }

        let top = self.current().ok_or(NavError::EmptyStack)?;
        let state = self.state_of(top);
        let screen = self
            .slots
            .get_mut(&top)
            .and_then(|slot| slot.screen.as_mut())
            .ok_or(NavError::State {
                id: top,
                state,
                op: "route events to",
            })?;

        let action = screen.handle_event(event, ctx)?;
        Ok(self.apply(action, ctx)?)
    }

    /// Perform a screen's requested transition
    pub fn apply(&mut self, action: ScreenAction, ctx: &mut ScreenContext) -> Result<NavStatus, NavError> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Push(id) => self.push(id, ctx)?,
            ScreenAction::Pop => {
                self.pop(PopPolicy::Retain, ctx)?;
            }
            ScreenAction::PopAndDispose => {
                self.pop(PopPolicy::Dispose, ctx)?;
            }
            ScreenAction::Replace { evict, push } => self.replace(&evict, push, ctx)?,
            ScreenAction::Swap(id) => self.swap(id, ctx)?,
            ScreenAction::Quit => {
                info!("ui-nav: quit requested by {:?}", self.current());
                return Ok(NavStatus::Exit);
            }
        }
        Ok(NavStatus::Continue)
    }

    /// Draw the top screen only
    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let Some(top) = self.current() else {
            return Ok(());
        };
        if let Some(screen) = self.slots.get_mut(&top).and_then(|slot| slot.screen.as_mut()) {
            screen.render(frame, area, ctx)?;
        }
        Ok(())
    }

    fn state_of(&self, id: ScreenId) -> Lifecycle {
        self.lifecycle(id).unwrap_or_default()
    }

    fn ensure_registered(&self, id: ScreenId) -> Result<(), NavError> {
        if self.slots.contains_key(&id) {
            Ok(())
        } else {
            Err(NavError::Lookup(id))
        }
    }

    fn ensure_not_stacked(&self, id: ScreenId, op: &'static str) -> Result<(), NavError> {
        if self.stack.contains(&id) {
            Err(NavError::State {
                id,
                state: self.state_of(id),
                op,
            })
        } else {
            Ok(())
        }
    }

    /// Instantiate-or-reuse, build if needed, then show
    fn activate(&mut self, id: ScreenId, ctx: &mut ScreenContext) {
        let Some(slot) = self.slots.get_mut(&id) else {
            return;
        };
        let screen = slot.screen.get_or_insert_with(|| (slot.factory)());

        if slot.state.needs_build() {
            screen.set_up(ctx);
            slot.state = Lifecycle::Built;
            slot.builds += 1;
            debug!("ui-nav: built {} (build #{})", id, slot.builds);
        }
        screen.show(ctx);
        slot.state = Lifecycle::Shown;
    }

    fn deactivate(&mut self, id: ScreenId, ctx: &mut ScreenContext) {
        if let Some(slot) = self.slots.get_mut(&id) {
            if let Some(screen) = slot.screen.as_mut() {
                if slot.state == Lifecycle::Shown {
                    screen.hide(ctx);
                    slot.state = Lifecycle::Hidden;
                }
            }
        }
    }

    /// Drop the instance so the next activation starts from the factory
    fn teardown(&mut self, id: ScreenId) {
        let Some(slot) = self.slots.get_mut(&id) else {
            return;
        };
        if !slot.state.is_built() {
            return;
        }
        if let Some(mut screen) = slot.screen.take() {
            screen.dispose();
        }
        slot.state = Lifecycle::Disposed;
        debug!("ui-nav: disposed {}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Services;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Calls {
        set_up: usize,
        show: usize,
        hide: usize,
        dispose: usize,
    }

    struct Tracked {
        id: ScreenId,
        calls: Rc<RefCell<Calls>>,
        on_key: ScreenAction,
    }

    impl Screen for Tracked {
        fn id(&self) -> ScreenId {
            self.id
        }
        fn set_up(&mut self, _ctx: &mut ScreenContext) {
            self.calls.borrow_mut().set_up += 1;
        }
        fn show(&mut self, _ctx: &mut ScreenContext) {
            self.calls.borrow_mut().show += 1;
        }
        fn hide(&mut self, _ctx: &mut ScreenContext) {
            self.calls.borrow_mut().hide += 1;
        }
        fn dispose(&mut self) {
            self.calls.borrow_mut().dispose += 1;
        }
        fn render(&mut self, _frame: &mut Frame, _area: Rect, _ctx: &RenderContext) -> Result<()> {
            Ok(())
        }
        fn handle_event(&mut self, _event: Event, _ctx: &mut ScreenContext) -> Result<ScreenAction> {
            Ok(self.on_key.clone())
        }
    }

    fn tracked(
        nav: &mut Navigator,
        id: ScreenId,
        on_key: ScreenAction,
    ) -> Rc<RefCell<Calls>> {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let shared = calls.clone();
        nav.register(id, move || -> Box<dyn Screen> {
            Box::new(Tracked {
                id,
                calls: shared.clone(),
                on_key: on_key.clone(),
            })
        });
        calls
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_start_builds_and_shows_root() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        let calls = tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);

        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        assert_eq!(nav.current(), Some(ScreenId::MainMenu));
        assert_eq!(nav.lifecycle(ScreenId::MainMenu), Some(Lifecycle::Shown));
        assert_eq!(calls.borrow().set_up, 1);
        assert_eq!(calls.borrow().show, 1);
    }

    #[test]
    fn test_start_twice_is_state_error() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let err = nav.start(ScreenId::MainMenu, &mut services.context()).unwrap_err();
        assert!(matches!(err, NavError::State { .. }));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_push_hides_previous_top() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        let menu = tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        tracked(&mut nav, ScreenId::About, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        nav.push(ScreenId::About, &mut services.context()).unwrap();

        assert_eq!(nav.stack(), &[ScreenId::MainMenu, ScreenId::About]);
        assert_eq!(nav.lifecycle(ScreenId::MainMenu), Some(Lifecycle::Hidden));
        assert_eq!(nav.lifecycle(ScreenId::About), Some(Lifecycle::Shown));
        assert_eq!(menu.borrow().hide, 1);
    }

    #[test]
    fn test_pop_retain_reuses_widget_tree() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        let about = tracked(&mut nav, ScreenId::About, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        for _ in 0..3 {
            nav.push(ScreenId::About, &mut services.context()).unwrap();
            let popped = nav.pop(PopPolicy::Retain, &mut services.context()).unwrap();
            assert_eq!(popped, ScreenId::About);
        }

        assert_eq!(about.borrow().set_up, 1);
        assert_eq!(about.borrow().show, 3);
        assert_eq!(nav.lifecycle(ScreenId::About), Some(Lifecycle::Hidden));
        assert_eq!(nav.lifecycle(ScreenId::MainMenu), Some(Lifecycle::Shown));
    }

    #[test]
    fn test_pop_dispose_rebuilds_next_time() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        let game = tracked(&mut nav, ScreenId::Game, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        nav.push(ScreenId::Game, &mut services.context()).unwrap();
        nav.pop(PopPolicy::Dispose, &mut services.context()).unwrap();
        assert_eq!(nav.lifecycle(ScreenId::Game), Some(Lifecycle::Disposed));
        assert_eq!(game.borrow().dispose, 1);

        nav.push(ScreenId::Game, &mut services.context()).unwrap();
        assert_eq!(game.borrow().set_up, 2);
        assert_eq!(nav.build_count(ScreenId::Game), 2);
    }

    #[test]
    fn test_pop_root_is_empty_stack_error() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let err = nav.pop(PopPolicy::Retain, &mut services.context()).unwrap_err();
        assert_eq!(err, NavError::EmptyStack);
        assert_eq!(nav.stack(), &[ScreenId::MainMenu]);
        assert_eq!(nav.lifecycle(ScreenId::MainMenu), Some(Lifecycle::Shown));
    }

    #[test]
    fn test_unregistered_push_is_lookup_error() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let err = nav.push(ScreenId::Tutorial, &mut services.context()).unwrap_err();
        assert_eq!(err, NavError::Lookup(ScreenId::Tutorial));
        assert_eq!(nav.stack(), &[ScreenId::MainMenu]);
        assert_eq!(nav.lifecycle(ScreenId::Tutorial), None);
    }

    #[test]
    fn test_push_already_stacked_is_state_error() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let err = nav.push(ScreenId::MainMenu, &mut services.context()).unwrap_err();
        assert_eq!(
            err,
            NavError::State {
                id: ScreenId::MainMenu,
                state: Lifecycle::Shown,
                op: "push",
            }
        );
    }

    #[test]
    fn test_replace_skips_unbuilt_and_disposes_built() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        let about = tracked(&mut nav, ScreenId::About, ScreenAction::None);
        let settings = tracked(&mut nav, ScreenId::Settings, ScreenAction::None);
        tracked(&mut nav, ScreenId::Game, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();
        nav.push(ScreenId::About, &mut services.context()).unwrap();
        nav.pop(PopPolicy::Retain, &mut services.context()).unwrap();

        nav.replace(
            &[ScreenId::About, ScreenId::Settings],
            ScreenId::Game,
            &mut services.context(),
        )
        .unwrap();

        assert_eq!(nav.stack(), &[ScreenId::MainMenu, ScreenId::Game]);
        assert_eq!(nav.lifecycle(ScreenId::About), Some(Lifecycle::Disposed));
        assert_eq!(about.borrow().dispose, 1);
        assert_eq!(nav.lifecycle(ScreenId::Settings), Some(Lifecycle::Uninitialized));
        assert_eq!(settings.borrow().dispose, 0);
    }

    #[test]
    fn test_replace_rejects_stacked_victim_without_side_effects() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        let about = tracked(&mut nav, ScreenId::About, ScreenAction::None);
        let settings = tracked(&mut nav, ScreenId::Settings, ScreenAction::None);
        tracked(&mut nav, ScreenId::Game, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();
        nav.push(ScreenId::About, &mut services.context()).unwrap();
        nav.pop(PopPolicy::Retain, &mut services.context()).unwrap();
        nav.push(ScreenId::Settings, &mut services.context()).unwrap();

        let err = nav
            .replace(
                &[ScreenId::About, ScreenId::Settings],
                ScreenId::Game,
                &mut services.context(),
            )
            .unwrap_err();

        assert!(matches!(err, NavError::State { id: ScreenId::Settings, .. }));
        assert_eq!(nav.stack(), &[ScreenId::MainMenu, ScreenId::Settings]);
        assert_eq!(nav.lifecycle(ScreenId::About), Some(Lifecycle::Hidden));
        assert_eq!(about.borrow().dispose, 0);
        assert_eq!(settings.borrow().dispose, 0);
    }

    #[test]
    fn test_swap_replaces_top() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        let tutorial = tracked(&mut nav, ScreenId::Tutorial, ScreenAction::None);
        tracked(&mut nav, ScreenId::Game, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();
        nav.push(ScreenId::Tutorial, &mut services.context()).unwrap();

        nav.swap(ScreenId::Game, &mut services.context()).unwrap();

        assert_eq!(nav.stack(), &[ScreenId::MainMenu, ScreenId::Game]);
        assert_eq!(nav.lifecycle(ScreenId::Tutorial), Some(Lifecycle::Disposed));
        assert_eq!(tutorial.borrow().dispose, 1);
    }

    #[test]
    fn test_swap_at_root_fails() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        tracked(&mut nav, ScreenId::Game, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let err = nav.swap(ScreenId::Game, &mut services.context()).unwrap_err();
        assert_eq!(err, NavError::EmptyStack);
        assert_eq!(nav.lifecycle(ScreenId::MainMenu), Some(Lifecycle::Shown));
    }

    #[test]
    fn test_dispose_stacked_screen_fails() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        assert!(nav.dispose(ScreenId::MainMenu).is_err());
        assert_eq!(nav.lifecycle(ScreenId::MainMenu), Some(Lifecycle::Shown));
    }

    #[test]
    fn test_dispose_never_built_is_noop() {
        let mut nav = Navigator::new();
        let calls = tracked(&mut nav, ScreenId::About, ScreenAction::None);

        nav.dispose(ScreenId::About).unwrap();
        assert_eq!(nav.lifecycle(ScreenId::About), Some(Lifecycle::Uninitialized));
        assert_eq!(calls.borrow().dispose, 0);
    }

    #[test]
    fn test_handle_event_applies_screen_action() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::Push(ScreenId::About));
        tracked(&mut nav, ScreenId::About, ScreenAction::Pop);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        let status = nav.handle_event(enter.clone(), &mut services.context()).unwrap();
        assert_eq!(status, NavStatus::Continue);
        assert_eq!(nav.current(), Some(ScreenId::About));

        nav.handle_event(enter, &mut services.context()).unwrap();
        assert_eq!(nav.current(), Some(ScreenId::MainMenu));
    }

    #[test]
    fn test_quit_action_exits() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::Quit);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let status = nav
            .handle_event(key(KeyCode::Char('q'), KeyModifiers::NONE), &mut services.context())
            .unwrap();
        assert_eq!(status, NavStatus::Exit);
    }

    #[test]
    fn test_force_quit_bypasses_screen() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::Push(ScreenId::About));
        tracked(&mut nav, ScreenId::About, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let status = nav
            .handle_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut services.context())
            .unwrap();
        assert_eq!(status, NavStatus::Exit);
        assert_eq!(nav.current(), Some(ScreenId::MainMenu));
    }

    #[test]
    fn test_failed_action_surfaces_as_error() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        tracked(&mut nav, ScreenId::MainMenu, ScreenAction::Pop);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let err = nav
            .handle_event(key(KeyCode::Esc, KeyModifiers::NONE), &mut services.context())
            .unwrap_err();
        assert_eq!(err.downcast_ref::<NavError>(), Some(&NavError::EmptyStack));
    }

    #[test]
    fn test_swap_leaves_screen_beneath_hidden() {
        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        let menu = tracked(&mut nav, ScreenId::MainMenu, ScreenAction::None);
        tracked(&mut nav, ScreenId::Tutorial, ScreenAction::None);
        let game = tracked(&mut nav, ScreenId::Game, ScreenAction::None);
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();
        nav.push(ScreenId::Tutorial, &mut services.context()).unwrap();
        let before = menu.borrow().clone();

        nav.swap(ScreenId::Game, &mut services.context()).unwrap();

        assert_eq!(*menu.borrow(), before);
        assert_eq!(nav.lifecycle(ScreenId::MainMenu), Some(Lifecycle::Hidden));
        assert_eq!(nav.lifecycle(ScreenId::Game), Some(Lifecycle::Shown));
        assert_eq!(game.borrow().show, 1);
    }

    #[test]
    fn test_random_operations_keep_one_shown_screen() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut services = Services::in_memory();
        let mut nav = Navigator::new();
        for id in ScreenId::ALL {
            tracked(&mut nav, id, ScreenAction::None);
        }
        nav.start(ScreenId::MainMenu, &mut services.context()).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let pick = |rng: &mut StdRng| ScreenId::ALL[rng.gen_range(0..ScreenId::ALL.len())];

        for step in 0..2000 {
            let stack_before = nav.stack().to_vec();
            let states_before: Vec<_> = ScreenId::ALL.iter().map(|&id| nav.lifecycle(id)).collect();
            let mut ctx = services.context();

            let outcome = match rng.gen_range(0..6) {
                0 => nav.push(pick(&mut rng), &mut ctx),
                1 => nav.pop(PopPolicy::Retain, &mut ctx).map(|_| ()),
                2 => nav.pop(PopPolicy::Dispose, &mut ctx).map(|_| ()),
                3 => nav.swap(pick(&mut rng), &mut ctx),
                4 => {
                    let evict: Vec<_> = ScreenId::ALL
                        .iter()
                        .copied()
                        .filter(|_| rng.gen_bool(0.3))
                        .collect();
                    let id = pick(&mut rng);
                    nav.replace(&evict, id, &mut ctx)
                }
                _ => nav.dispose(pick(&mut rng)),
            };

            if outcome.is_err() {
                let states_after: Vec<_> = ScreenId::ALL.iter().map(|&id| nav.lifecycle(id)).collect();
                assert_eq!(nav.stack(), stack_before.as_slice(), "step {step}");
                assert_eq!(states_after, states_before, "step {step}");
            }

            let shown: Vec<_> = ScreenId::ALL
                .iter()
                .copied()
                .filter(|&id| nav.lifecycle(id) == Some(Lifecycle::Shown))
                .collect();
            assert_eq!(shown.len(), 1, "step {step}: {shown:?}");
            assert_eq!(Some(shown[0]), nav.current(), "step {step}");
            for &id in &nav.stack()[..nav.depth() - 1] {
                assert_eq!(nav.lifecycle(id), Some(Lifecycle::Hidden), "step {step}: {id}");
            }
        }
    }
}
