//! The drawer host.
//!
//! [`PanelHost`] is the one surface bound to the [`PanelStack`]. It follows
//! the stack through a watch receiver, resolves renderers for whatever is
//! on top, owns the scroll viewport and moves view state in and out of the
//! [`ViewStateStore`]:
//!
//! - a fresh open scrolls to the top and cancels any pending restore
//! - going back schedules a restore of the stored offset, applied by
//!   [`PanelHost::after_layout`] once the restored body has been laid out
//! - leaving a drawer forward (opening another, or closing) saves its
//!   offset and expanded sections; the drawer popped by going back is
//!   discarded without a save
//! - a restore is re-applied on every layout until the title height has
//!   settled, so a taller title on the restored drawer cannot clamp it
//! - every section toggle saves offset and sections together

use std::sync::Arc;

use ratatui::layout::Rect;
use ratatui::text::Line;
use tokio::sync::watch;

use super::body::RenderedBody;
use super::content_type::ContentType;
use super::feedback::{shows_report_problem, FeedbackRequest};
use super::registry::ContentTypeRegistry;
use super::request::PanelRequest;
use super::restore::PendingRestore;
use super::stack::{Navigation, PanelStack, PanelStackState, StackSnapshot};
use super::viewport::{ScrollViewport, TitleMeasure, DRAWER_CHROME_HEIGHT};
use super::wrap::{wrap_lines, WrappedText};
use crate::config::DrawerConfig;
use crate::traits::ViewStateStore;
use crate::view_state::{OpenedSections, PersistedViewState, ViewStateScope};

/// What the host looks like from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostState {
    Closed,
    Open { kind: ContentType, has_history: bool },
}

/// The navigation button shown in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAffordance {
    Back,
    Close,
}

/// Affordances shown around an open drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub nav: NavAffordance,
    pub report_problem: bool,
}

/// User commands the host understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerCommand {
    Back,
    Close,
    ScrollUp(u16),
    ScrollDown(u16),
    PageUp,
    PageDown,
    ScrollTop,
    NextLink,
    PrevLink,
    FollowLink,
    NextSection,
    PrevSection,
    ToggleSection,
    ReportProblem,
}

/// Result of handling a command.
#[derive(Debug, Clone, PartialEq)]
pub enum HostOutcome {
    /// Nothing to do (drawer closed, or command not applicable).
    Ignored,
    /// State changed; draw again.
    Redraw,
    /// The drawer closed to file a content report.
    Feedback(FeedbackRequest),
}

/// Screen areas of an open drawer for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerLayout {
    pub frame: Rect,
    pub title: Rect,
    pub divider: Rect,
    pub body: Rect,
    pub footer: Rect,
    /// The title measured differently from last frame; draw again so the
    /// body picks up the new height.
    pub needs_redraw: bool,
}

#[derive(Debug, Clone)]
struct ActivePanel {
    request: PanelRequest,
    generation: u64,
    slot: String,
    view: PersistedViewState,
}

/// The single drawer surface.
pub struct PanelHost {
    stack: PanelStack,
    rx: watch::Receiver<StackSnapshot>,
    registry: Arc<ContentTypeRegistry>,
    store: Box<dyn ViewStateStore>,
    scope: ViewStateScope,
    width_percent: u16,
    fallback_title_height: u16,
    active: Option<ActivePanel>,
    title_lines: Vec<Line<'static>>,
    body: RenderedBody,
    wrapped_title: WrappedText,
    wrapped_body: WrappedText,
    wrapped_width: Option<u16>,
    viewport: ScrollViewport,
    title_measure: TitleMeasure,
    title_settled: bool,
    pending_restore: Option<PendingRestore>,
    focused_link: Option<usize>,
    focused_section: Option<usize>,
}

impl PanelHost {
    pub fn new(
        stack: PanelStack,
        registry: Arc<ContentTypeRegistry>,
        store: Box<dyn ViewStateStore>,
        config: &DrawerConfig,
    ) -> Self {
        let rx = stack.subscribe();
        let initial = stack.snapshot();
        let mut host = Self {
            stack,
            rx,
            registry,
            store,
            scope: config.view_state_scope,
            width_percent: config.drawer_width_percent,
            fallback_title_height: config.fallback_title_height,
            active: None,
            title_lines: Vec::new(),
            body: RenderedBody::default(),
            wrapped_title: WrappedText::default(),
            wrapped_body: WrappedText::default(),
            wrapped_width: None,
            viewport: ScrollViewport::new(),
            title_measure: TitleMeasure::default(),
            title_settled: false,
            pending_restore: None,
            focused_link: None,
            focused_section: None,
        };
        host.apply_snapshot(initial);
        host
    }

    /// Handle to the stack this host follows.
    pub fn stack(&self) -> &PanelStack {
        &self.stack
    }

    /// Catch up with the stack. Returns true if anything changed.
    pub fn sync(&mut self) -> bool {
        if !self.rx.has_changed().unwrap_or(false) {
            return false;
        }
        let snapshot = self.rx.borrow_and_update().clone();
        self.apply_snapshot(snapshot)
    }

    fn apply_snapshot(&mut self, snapshot: StackSnapshot) -> bool {
        let current = self.active.as_ref().map(|a| a.generation);
        if current == Some(snapshot.generation) {
            return false;
        }

        if !self.pops_active(&snapshot) {
            self.persist_active();
        }

        self.focused_link = None;
        self.focused_section = None;
        self.viewport.scroll_to_top();

        match snapshot.state {
            PanelStackState::Closed => {
                self.active = None;
                self.pending_restore = None;
                self.title_lines.clear();
                self.body = RenderedBody::default();
                self.wrapped_title = WrappedText::default();
                self.wrapped_body = WrappedText::default();
                self.wrapped_width = None;
            }
            PanelStackState::Open(request) => {
                let slot = self.scope.slot_for(&request.kind);
                let view = self.store.load(&slot);

                self.pending_restore = match snapshot.navigation {
                    Navigation::WentBack => {
                        Some(PendingRestore::new(snapshot.generation, view.scroll_top))
                    }
                    _ => None,
                };

                tracing::debug!(
                    kind = %request.kind,
                    generation = snapshot.generation,
                    navigation = ?snapshot.navigation,
                    restore = ?self.pending_restore,
                    "drawer host activated"
                );

                self.active = Some(ActivePanel {
                    request,
                    generation: snapshot.generation,
                    slot,
                    view,
                });
                self.render_content();
            }
        }
        true
    }

    /// Whether `snapshot` is the result of going back from the active
    /// drawer. Transitions coalesced before a sync (an open followed by a
    /// back through another handle) do not count, so the drawer that was
    /// actually on screen still gets saved.
    fn pops_active(&self, snapshot: &StackSnapshot) -> bool {
        if snapshot.navigation != Navigation::WentBack {
            return false;
        }
        let (Some(active), Some(next)) = (&self.active, snapshot.state.request()) else {
            return false;
        };
        active.request.popped().as_ref() == Some(next)
    }

    fn render_content(&mut self) {
        let Some(active) = &self.active else {
            return;
        };
        let kind = &active.request.kind;
        self.title_lines = self
            .registry
            .resolve_title(kind)
            .map(|r| r.render_title(&active.request.data))
            .unwrap_or_default();
        self.body = self
            .registry
            .resolve_body(kind)
            .map(|r| r.render_body(&active.request.data, &active.view.opened_dict))
            .unwrap_or_default();

        if self.focused_link.is_some_and(|i| i >= self.body.links.len()) {
            self.focused_link = None;
        }
        if self.focused_section.is_some_and(|i| i >= self.body.sections.len()) {
            self.focused_section = None;
        }
        self.wrapped_width = None;
    }

    fn persist_active(&mut self) {
        let offset = self.viewport.offset();
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.view.scroll_top = offset;
        let (slot, view) = (active.slot.clone(), active.view.clone());
        self.save(&slot, &view);
    }

    fn save(&mut self, slot: &str, view: &PersistedViewState) {
        if let Err(e) = self.store.save(slot, view) {
            tracing::warn!(slot, code = e.error_code(), error = %e, "drawer view state not saved");
        }
    }

    /// Merge a new section-expansion dictionary into the view state and
    /// persist it together with the current scroll offset.
    pub fn on_sections_changed(&mut self, opened: OpenedSections) {
        if self.active.is_none() {
            return;
        }
        if let Some(active) = self.active.as_mut() {
            active.view.opened_dict = opened;
        }
        self.persist_active();
        self.render_content();
    }

    /// Lay the drawer out inside `area` for this frame.
    ///
    /// The body height comes from the title height measured on an earlier
    /// frame (or the fallback); the title is then re-measured for the next
    /// one. Returns `None` when the drawer is closed.
    pub fn layout(&mut self, area: Rect) -> Option<DrawerLayout> {
        self.active.as_ref()?;

        let width = ((area.width as u32 * self.width_percent as u32) / 100) as u16;
        let width = width.clamp(area.width.min(20), area.width);
        let frame = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: area.height,
        };
        let inner_width = frame.width.saturating_sub(2);
        let inner_x = frame.x + 1;

        let max_title = frame.height.saturating_sub(DRAWER_CHROME_HEIGHT);
        let title_height = self
            .title_measure
            .height_or(self.fallback_title_height)
            .min(max_title);
        let body_height = frame
            .height
            .saturating_sub(title_height + DRAWER_CHROME_HEIGHT);

        let title = Rect {
            x: inner_x,
            y: frame.y + 1,
            width: inner_width,
            height: title_height,
        };
        let divider = Rect {
            x: inner_x,
            y: title.y + title.height,
            width: inner_width,
            height: 1.min(frame.height.saturating_sub(2)),
        };
        let body = Rect {
            x: inner_x,
            y: divider.y + divider.height,
            width: inner_width,
            height: body_height,
        };
        let footer = Rect {
            x: inner_x,
            y: body.y + body.height,
            width: inner_width,
            height: 1.min(frame.height.saturating_sub(2 + title_height + 1)),
        };

        if self.wrapped_width != Some(inner_width) {
            self.wrapped_title = wrap_lines(&self.title_lines, inner_width);
            self.wrapped_body = wrap_lines(&self.body.lines, inner_width);
            self.wrapped_width = Some(inner_width);
        }
        self.viewport
            .set_layout(self.wrapped_body.height(), body_height);
        let needs_redraw = self.title_measure.record(self.wrapped_title.height());
        self.title_settled = !needs_redraw;

        Some(DrawerLayout {
            frame,
            title,
            divider,
            body,
            footer,
            needs_redraw,
        })
    }

    /// Run deferred work that needs the current layout.
    ///
    /// Applies a pending scroll restore if it still targets the drawer on
    /// screen. The restore stays pending while the last layout measured a
    /// new title height, since the body height it was clamped against
    /// changes on the next frame. Returns true if the offset was restored.
    pub fn after_layout(&mut self) -> bool {
        let Some(restore) = self.pending_restore else {
            return false;
        };
        let current = self.active.as_ref().map(|a| a.generation);
        let applied = restore.apply(current, &mut self.viewport);
        if !applied || self.title_settled {
            self.pending_restore = None;
        }
        applied
    }

    /// Handle a user command.
    pub fn handle(&mut self, command: DrawerCommand) -> HostOutcome {
        self.sync();
        let Some(active) = &self.active else {
            return HostOutcome::Ignored;
        };

        match command {
            DrawerCommand::Back => {
                self.stack.go_back();
                self.sync();
                HostOutcome::Redraw
            }
            DrawerCommand::Close => {
                self.stack.close();
                self.sync();
                HostOutcome::Redraw
            }
            DrawerCommand::ScrollUp(n) => redraw_if(self.viewport.scroll_up(n)),
            DrawerCommand::ScrollDown(n) => redraw_if(self.viewport.scroll_down(n)),
            DrawerCommand::PageUp => {
                let page = self.viewport.page();
                redraw_if(self.viewport.scroll_up(page))
            }
            DrawerCommand::PageDown => {
                let page = self.viewport.page();
                redraw_if(self.viewport.scroll_down(page))
            }
            DrawerCommand::ScrollTop => {
                let moved = self.viewport.offset() != 0;
                self.viewport.scroll_to_top();
                redraw_if(moved)
            }
            DrawerCommand::NextLink | DrawerCommand::PrevLink => {
                let forward = command == DrawerCommand::NextLink;
                self.focused_link = cycle(self.focused_link, self.body.links.len(), forward);
                if let Some(line) = self.focused_link.map(|i| self.body.links[i].line) {
                    let row = self.anchor_row(line);
                    self.viewport.ensure_visible(row);
                }
                redraw_if(self.focused_link.is_some())
            }
            DrawerCommand::FollowLink => {
                let Some(link) = self.focused_link.and_then(|i| self.body.links.get(i)) else {
                    return HostOutcome::Ignored;
                };
                let next = active.request.drill_in(link.kind.clone(), link.data.clone());
                self.stack.open(next);
                self.sync();
                HostOutcome::Redraw
            }
            DrawerCommand::NextSection | DrawerCommand::PrevSection => {
                let forward = command == DrawerCommand::NextSection;
                self.focused_section =
                    cycle(self.focused_section, self.body.sections.len(), forward);
                if let Some(line) = self.focused_section.map(|i| self.body.sections[i].line) {
                    let row = self.anchor_row(line);
                    self.viewport.ensure_visible(row);
                }
                redraw_if(self.focused_section.is_some())
            }
            DrawerCommand::ToggleSection => {
                let Some(section) = self.focused_section.and_then(|i| self.body.sections.get(i))
                else {
                    return HostOutcome::Ignored;
                };
                let mut view = active.view.clone();
                view.toggle_section(&section.key, &section.id);
                self.on_sections_changed(view.opened_dict);
                HostOutcome::Redraw
            }
            DrawerCommand::ReportProblem => {
                let Some(feedback) = FeedbackRequest::for_request(&active.request) else {
                    return HostOutcome::Ignored;
                };
                self.stack.close();
                self.sync();
                HostOutcome::Feedback(feedback)
            }
        }
    }

    /// Row of body line `line` after wrapping, or the line itself before
    /// the first layout.
    fn anchor_row(&self, line: usize) -> u16 {
        let row = if self.wrapped_width.is_some() {
            self.wrapped_body.row_of(line)
        } else {
            line
        };
        row.min(u16::MAX as usize) as u16
    }

    /// Visible state derived from the stack.
    pub fn state(&self) -> HostState {
        match &self.active {
            None => HostState::Closed,
            Some(active) => HostState::Open {
                kind: active.request.kind.clone(),
                has_history: active.request.has_history(),
            },
        }
    }

    /// Affordances for the open drawer, `None` when closed.
    pub fn affordances(&self) -> Option<Affordances> {
        let active = self.active.as_ref()?;
        Some(Affordances {
            nav: if active.request.has_history() {
                NavAffordance::Back
            } else {
                NavAffordance::Close
            },
            report_problem: shows_report_problem(Some(&active.request)),
        })
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn request(&self) -> Option<&PanelRequest> {
        self.active.as_ref().map(|a| &a.request)
    }

    pub fn title_lines(&self) -> &[Line<'static>] {
        &self.title_lines
    }

    pub fn body(&self) -> &RenderedBody {
        &self.body
    }

    /// Title rows as wrapped by the last layout.
    pub fn wrapped_title(&self) -> &WrappedText {
        &self.wrapped_title
    }

    /// Body rows as wrapped by the last layout.
    pub fn wrapped_body(&self) -> &WrappedText {
        &self.wrapped_body
    }

    pub fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    pub fn title_measure(&self) -> TitleMeasure {
        self.title_measure
    }

    pub fn pending_restore(&self) -> Option<PendingRestore> {
        self.pending_restore
    }

    pub fn opened_sections(&self) -> Option<&OpenedSections> {
        self.active.as_ref().map(|a| &a.view.opened_dict)
    }

    pub fn focused_link(&self) -> Option<usize> {
        self.focused_link
    }

    pub fn focused_section(&self) -> Option<usize> {
        self.focused_section
    }
}

fn redraw_if(changed: bool) -> HostOutcome {
    if changed {
        HostOutcome::Redraw
    } else {
        HostOutcome::Ignored
    }
}

fn cycle(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(cycle(None, 0, true), None);
        assert_eq!(cycle(None, 3, true), Some(0));
        assert_eq!(cycle(None, 3, false), Some(2));
        assert_eq!(cycle(Some(2), 3, true), Some(0));
        assert_eq!(cycle(Some(0), 3, false), Some(2));
    }
}
