//! Generic dialog renderer
//!
//! `SimpleDialog` draws a modal surface with a title, a body message and a
//! right-aligned row of buttons built from caller-supplied descriptors. A
//! button handler may return a `Message`; those are buffered in an
//! insertion-ordered list and drawn beneath the body until dismissed.
//!
//! Keyboard: `Tab`/`Right` and `BackTab`/`Left` move focus, `Enter`/`Space`
//! activate the focused button or dismiss the focused message. Mouse: a
//! left click on a button activates it, a click on a message's `✕`
//! dismisses it.

use super::{
    button::{
        ButtonAction, ButtonEvent, ButtonKind, DialogButton, Navigator, SystemBrowser, Trigger,
    },
    message::{Message, MessageList},
    types::{BaseDialogProps, Dialog, DialogContent, DialogFrame, DialogLayout, DialogType},
};
use crate::tui::{
    components::{contains_point, Component, ComponentState},
    themes::Theme,
    Frame,
};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{block::Title, Block, Borders, Clear, Paragraph, Wrap},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Height of a bordered button row
const BUTTON_ROW_HEIGHT: u16 = 3;

/// Columns reserved around a message bar's text for its icon and `✕`
const MESSAGE_CHROME_WIDTH: u16 = 4;

/// Props for [`SimpleDialog`]
#[derive(Debug, Default)]
pub struct SimpleDialogProps {
    pub base: BaseDialogProps,
    pub buttons: Vec<DialogButton>,
}

impl SimpleDialogProps {
    pub fn new(base: BaseDialogProps) -> Self {
        Self {
            base,
            buttons: Vec::new(),
        }
    }

    pub fn with_button(mut self, button: DialogButton) -> Self {
        self.buttons.push(button);
        self
    }
}

/// Focusable parts of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Dismiss target of the message at this list position
    Message(usize),
    /// Extra body content supplied by a wrapping dialog
    Body,
    /// Button at this descriptor index
    Button(usize),
}

/// Whether a dialog consumed an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Handled,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    Button(usize),
    Dismiss(usize),
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Subtext,
    Message,
    Body,
    Messages,
    Buttons,
}

/// Extra content drawn between the body message and the message bars
pub trait DialogBody: Send + Sync {
    /// Rows needed at the given content width
    fn height(&self, width: u16) -> u16;

    /// When `true` the dialog does not draw its own body message
    fn replaces_message(&self) -> bool {
        false
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool);
}

/// Generic dialog with caller-defined buttons and dismissible messages
pub struct SimpleDialog {
    state: ComponentState,
    frame: DialogFrame,
    message: DialogContent,
    buttons: Vec<DialogButton>,
    messages: MessageList,
    focus: Option<Focus>,
    body_focusable: bool,
    navigator: Arc<dyn Navigator>,
    hit_targets: Vec<(Rect, HitTarget)>,
}

impl SimpleDialog {
    pub fn new(props: SimpleDialogProps) -> Self {
        let frame = DialogFrame::resolve(&props.base);
        let visible = props.buttons.iter().filter(|b| b.is_visible()).count();
        debug!(
            title = %frame.content.title,
            buttons = props.buttons.len(),
            visible,
            "Mounting dialog"
        );

        let mut dialog = Self {
            state: ComponentState::new(),
            frame,
            message: props.base.message,
            buttons: props.buttons,
            messages: MessageList::new(),
            focus: None,
            body_focusable: false,
            navigator: Arc::new(SystemBrowser),
            hit_targets: Vec::new(),
        };
        dialog.focus = dialog.default_focus();
        dialog
    }

    /// Replace the link opener used by navigation buttons
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Make the extra body content part of the focus ring and focus it first
    pub fn with_focusable_body(mut self) -> Self {
        self.body_focusable = true;
        self.focus = Some(Focus::Body);
        self
    }

    pub fn buttons(&self) -> &[DialogButton] {
        &self.buttons
    }

    pub fn messages(&self) -> &MessageList {
        &self.messages
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Activate the button at `index`.
    ///
    /// Calls its handler and appends the returned message, or opens its
    /// link. Hidden and out-of-range buttons do nothing. Returns the handle
    /// of an appended message.
    pub fn activate(&mut self, index: usize, trigger: Trigger) -> Option<Arc<Message>> {
        let button = self.buttons.get_mut(index)?;

        match button.action() {
            ButtonAction::Invoke => {
                let event = ButtonEvent {
                    index,
                    text: button.text.clone(),
                    trigger,
                };
                debug!(index, text = %event.text, "Button activated");

                let message = button.on_activate.as_mut().and_then(|handler| handler(&event))?;
                let handle = self.messages.push(message);
                self.ensure_focus();
                Some(handle)
            }
            ButtonAction::Navigate => {
                if let Some(href) = button.href.as_deref() {
                    if let Err(e) = self.navigator.navigate(href, button.target.as_deref()) {
                        warn!(href, "Failed to open link: {}", e);
                    }
                }
                None
            }
            ButtonAction::Hidden => None,
        }
    }

    /// Remove a shown message. Unknown messages are ignored.
    pub fn dismiss(&mut self, message: &Arc<Message>) -> bool {
        let removed = self.messages.dismiss(message);
        if removed {
            self.ensure_focus();
        }
        removed
    }

    fn dismiss_at(&mut self, index: usize) -> bool {
        match self.messages.get(index).cloned() {
            Some(message) => self.dismiss(&message),
            None => false,
        }
    }

    /// Route a key press through focus navigation and activation
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyDisposition {
        if key.kind == KeyEventKind::Release {
            return KeyDisposition::Handled;
        }

        self.ensure_focus();
        let on_body = self.focus == Some(Focus::Body);

        match key.code {
            KeyCode::Tab => {
                self.move_focus(true);
                KeyDisposition::Handled
            }
            KeyCode::BackTab => {
                self.move_focus(false);
                KeyDisposition::Handled
            }
            KeyCode::Right if !on_body => {
                self.move_focus(true);
                KeyDisposition::Handled
            }
            KeyCode::Left if !on_body => {
                self.move_focus(false);
                KeyDisposition::Handled
            }
            KeyCode::Enter | KeyCode::Char(' ') if !on_body => match self.focus {
                Some(Focus::Button(index)) => {
                    self.activate(index, Trigger::Key(key));
                    KeyDisposition::Handled
                }
                Some(Focus::Message(index)) => {
                    self.dismiss_at(index);
                    KeyDisposition::Handled
                }
                _ => KeyDisposition::Ignored,
            },
            _ => KeyDisposition::Ignored,
        }
    }

    /// Route a mouse event using the hit areas of the last render
    pub fn handle_mouse(&mut self, event: MouseEvent) -> KeyDisposition {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyDisposition::Ignored;
        }

        let hit = self
            .hit_targets
            .iter()
            .find(|(area, _)| contains_point(*area, event.column, event.row))
            .map(|(_, target)| *target);

        match hit {
            Some(HitTarget::Button(index)) => {
                self.focus = Some(Focus::Button(index));
                self.activate(index, Trigger::Mouse(event));
                KeyDisposition::Handled
            }
            Some(HitTarget::Dismiss(index)) => {
                self.dismiss_at(index);
                KeyDisposition::Handled
            }
            Some(HitTarget::Body) => {
                self.focus = Some(Focus::Body);
                KeyDisposition::Handled
            }
            None => KeyDisposition::Ignored,
        }
    }

    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring: Vec<Focus> = (0..self.messages.len()).map(Focus::Message).collect();
        if self.body_focusable {
            ring.push(Focus::Body);
        }
        ring.extend(
            self.buttons
                .iter()
                .enumerate()
                .filter(|(_, button)| button.is_visible())
                .map(|(index, _)| Focus::Button(index)),
        );
        ring
    }

    fn default_focus(&self) -> Option<Focus> {
        if self.body_focusable {
            return Some(Focus::Body);
        }
        self.buttons
            .iter()
            .position(DialogButton::is_visible)
            .map(Focus::Button)
            .or_else(|| (!self.messages.is_empty()).then_some(Focus::Message(0)))
    }

    fn ensure_focus(&mut self) {
        let valid = self
            .focus
            .map(|focus| self.focus_ring().contains(&focus))
            .unwrap_or(false);
        if !valid {
            self.focus = self.default_focus();
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let ring = self.focus_ring();
        if ring.is_empty() {
            self.focus = None;
            return;
        }

        let len = ring.len();
        let current = self.focus.and_then(|focus| ring.iter().position(|f| *f == focus));
        let next = match (current, forward) {
            (Some(pos), true) => (pos + 1) % len,
            (Some(pos), false) => (pos + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.focus = Some(ring[next]);
    }

    /// Render the dialog with optional extra body content
    pub fn render_with_body(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        mut body: Option<&mut dyn DialogBody>,
    ) {
        self.state.size = area;
        self.hit_targets.clear();
        let styles = theme.styles();

        if self.frame.modal.is_blocking && self.frame.modal.dark_overlay {
            let backdrop = styles.backdrop.patch(self.frame.modal.style);
            frame.render_widget(Block::default().style(backdrop), area);
        }

        let width = DialogLayout::content_width(&self.frame.dialog, area);
        let show_message = !body.as_deref().map(|b| b.replaces_message()).unwrap_or(false);

        let subtext = self
            .frame
            .content
            .subtext
            .as_deref()
            .map(|text| Text::from(wrap_lines(text, width)))
            .unwrap_or_default();
        let message = if show_message && !self.message.is_empty() {
            content_text(&self.message, width)
        } else {
            Text::default()
        };
        let bars: Vec<Vec<Line<'static>>> = self
            .messages
            .iter()
            .map(|m| wrap_lines(&m.text, width.saturating_sub(MESSAGE_CHROME_WIDTH)))
            .collect();
        let body_height = body.as_deref().map(|b| b.height(width)).unwrap_or(0);
        let buttons_height = if self.buttons.iter().any(DialogButton::is_visible) {
            BUTTON_ROW_HEIGHT
        } else {
            0
        };

        let bar_rows = bars
            .iter()
            .map(|b| clamp_rows(b.len()))
            .fold(0, u16::saturating_add);
        let sections: Vec<(Section, u16)> = [
            (Section::Subtext, text_height(&subtext, width)),
            (Section::Message, text_height(&message, width)),
            (Section::Body, body_height),
            (Section::Messages, bar_rows),
            (Section::Buttons, buttons_height),
        ]
        .into_iter()
        .filter(|(_, height)| *height > 0)
        .collect();

        let gaps = clamp_rows(sections.len().saturating_sub(1));
        let content_height = sections
            .iter()
            .map(|(_, h)| *h)
            .fold(gaps, u16::saturating_add);
        let layout = DialogLayout::calculate(&self.frame.dialog, area, content_height);

        frame.render_widget(Clear, layout.dialog_area);
        frame.render_widget(self.surface_block(theme), layout.dialog_area);

        let content = layout.content_area;
        let bottom = content.y + content.height;
        let mut y = content.y;

        for (position, (section, height)) in sections.into_iter().enumerate() {
            if position > 0 {
                y = y.saturating_add(1);
            }
            if y >= bottom {
                break;
            }
            let rect = Rect {
                x: content.x,
                y,
                width: content.width,
                height: height.min(bottom - y),
            };

            match section {
                Section::Subtext => {
                    let style = styles.dialog_subtext.patch(self.frame.content.style);
                    frame.render_widget(
                        Paragraph::new(subtext.clone()).style(style).wrap(Wrap { trim: false }),
                        rect,
                    );
                }
                Section::Message => {
                    let style = styles.dialog_content.patch(self.frame.content.style);
                    frame.render_widget(
                        Paragraph::new(message.clone()).style(style).wrap(Wrap { trim: false }),
                        rect,
                    );
                }
                Section::Body => {
                    if let Some(body) = body.as_deref_mut() {
                        body.render(frame, rect, theme, self.focus == Some(Focus::Body));
                        self.hit_targets.push((rect, HitTarget::Body));
                    }
                }
                Section::Messages => self.render_messages(frame, rect, theme, &bars),
                Section::Buttons => self.render_buttons(frame, rect, theme),
            }

            y = y.saturating_add(rect.height);
        }
    }

    fn surface_block(&self, theme: &Theme) -> Block<'static> {
        let styles = theme.styles();
        let surface = styles.dialog_surface.patch(self.frame.dialog.style);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.dialog_border.patch(self.frame.dialog.style))
            .style(surface);

        let title = &self.frame.content.title;
        if !title.is_empty() {
            let title_style = match self.frame.content.dialog_type {
                DialogType::LargeHeader => styles.dialog_title_large,
                DialogType::Normal | DialogType::Close => styles.dialog_title,
            }
            .patch(self.frame.content.style);
            block = block.title(Line::from(Span::styled(format!(" {} ", title), title_style)));
        }

        if self.frame.shows_close_glyph() {
            block = block.title(
                Title::from(Line::from(Span::styled(" ✕ ", styles.muted))).alignment(Alignment::Right),
            );
        }

        block
    }

    fn render_messages(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        bars: &[Vec<Line<'static>>],
    ) {
        let bottom = area.y + area.height;
        let mut y = area.y;

        for (index, (message, lines)) in self.messages.iter().zip(bars).enumerate() {
            if y >= bottom {
                break;
            }
            let height = clamp_rows(lines.len()).min(bottom - y);
            let style = message.severity.style(theme).patch(message.style.unwrap_or_default());

            let text: Vec<Line<'static>> = lines
                .iter()
                .enumerate()
                .map(|(row, line)| {
                    let lead = if row == 0 {
                        format!("{} ", message.severity.icon())
                    } else {
                        "  ".to_string()
                    };
                    let mut spans = vec![Span::raw(lead)];
                    spans.extend(line.spans.iter().cloned());
                    Line::from(spans)
                })
                .collect();

            let bar = Rect {
                x: area.x,
                y,
                width: area.width.saturating_sub(2),
                height,
            };
            frame.render_widget(Paragraph::new(text).style(style), bar);

            let dismiss = Rect {
                x: area.x + area.width.saturating_sub(1),
                y,
                width: 1.min(area.width),
                height: 1,
            };
            let glyph_style = if self.focus == Some(Focus::Message(index)) {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            frame.render_widget(Paragraph::new("✕").style(glyph_style), dismiss);
            self.hit_targets.push((dismiss, HitTarget::Dismiss(index)));

            y = y.saturating_add(height);
        }
    }

    fn render_buttons(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let styles = theme.styles();
        let visible: Vec<(usize, u16)> = self
            .buttons
            .iter()
            .enumerate()
            .filter(|(_, button)| button.is_visible())
            .map(|(index, button)| (index, button.display_width()))
            .collect();

        let gaps = clamp_rows(visible.len().saturating_sub(1));
        let total = visible.iter().map(|(_, w)| *w).fold(gaps, u16::saturating_add);
        let right = area.x + area.width;
        let mut x = right.saturating_sub(total).max(area.x);

        for (index, width) in visible {
            if x >= right {
                break;
            }
            let button = &self.buttons[index];
            let rect = Rect {
                x,
                y: area.y,
                width: width.min(right - x),
                height: area.height,
            };

            let base = match button.kind {
                ButtonKind::Primary => styles.button_primary,
                ButtonKind::Default => styles.button_default,
            };
            let style = base.patch(button.style.unwrap_or_default());
            let border_style = if self.focus == Some(Focus::Button(index)) {
                styles.button_focused
            } else {
                styles.dialog_border
            };

            let widget = Paragraph::new(button.text.clone())
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border_style));
            frame.render_widget(widget, rect);
            self.hit_targets.push((rect, HitTarget::Button(index)));

            x = x.saturating_add(width).saturating_add(1);
        }
    }
}

/// Wrap plain text into owned lines of at most `width` columns
pub(super) fn wrap_lines(text: &str, width: u16) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }
    textwrap::wrap(text, usize::from(width))
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect()
}

pub(super) fn content_text(content: &DialogContent, width: u16) -> Text<'static> {
    match content {
        DialogContent::Text(text) => Text::from(wrap_lines(text, width)),
        DialogContent::Rich(text) => text.clone(),
    }
}

/// Rows `text` occupies when soft-wrapped at `width`
pub(super) fn text_height(text: &Text<'_>, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    text.lines
        .iter()
        .map(|line| clamp_rows(line.width()).div_ceil(width).max(1))
        .fold(0, u16::saturating_add)
}

/// Row or column count clamped to what a terminal area can address
pub(super) fn clamp_rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

#[async_trait]
impl Component for SimpleDialog {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        self.handle_key(event);
        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        self.handle_mouse(event);
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.render_with_body(frame, area, theme, None);
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus;
    }
}

impl Dialog for SimpleDialog {
    fn frame(&self) -> &DialogFrame {
        &self.frame
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tui::components::dialogs::{message::MessageSeverity, types::ModalOverrides};
    use crossterm::event::KeyModifiers;
    use parking_lot::Mutex;
    use ratatui::{backend::TestBackend, style::Style, Terminal};
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub(crate) fn render_lines(component: &mut dyn Component, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                let area = frame.size();
                component.render(frame, area, &theme);
            })
            .expect("draw");

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer.get(x, y).symbol()).collect())
            .collect()
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Mutex<Vec<(String, Option<String>)>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, href: &str, target: Option<&str>) -> Result<()> {
            self.visits
                .lock()
                .push((href.to_string(), target.map(str::to_string)));
            Ok(())
        }
    }

    fn counting_button(text: &str, counter: Arc<AtomicUsize>) -> DialogButton {
        DialogButton::standard(text).on_activate(move |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Some(Message::info(format!("saved {}", n)))
        })
    }

    #[test]
    fn test_hidden_descriptor_is_not_rendered_or_focusable() {
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body").with_title("Title"))
            .with_button(DialogButton::primary("Decorative"))
            .with_button(DialogButton::standard("Save").on_activate(|_| None));
        let mut dialog = SimpleDialog::new(props);

        assert_eq!(dialog.focus_ring(), vec![Focus::Button(1)]);
        assert_eq!(dialog.focus(), Some(Focus::Button(1)));

        let screen = render_lines(&mut dialog, 80, 24).join("\n");
        assert!(screen.contains("Save"));
        assert!(!screen.contains("Decorative"));
    }

    #[test]
    fn test_activating_hidden_button_does_nothing() {
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body"))
            .with_button(DialogButton::primary("Decorative"));
        let mut dialog = SimpleDialog::new(props);

        assert!(dialog.activate(0, Trigger::Key(press(KeyCode::Enter))).is_none());
        assert!(dialog.activate(7, Trigger::Key(press(KeyCode::Enter))).is_none());
        assert!(dialog.messages().is_empty());
        assert_eq!(dialog.focus(), None);
    }

    #[test]
    fn test_returned_messages_append_in_call_order() {
        let counter = Arc::new(AtomicUsize::new(0));
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body"))
            .with_button(counting_button("Save", counter.clone()))
            .with_button(DialogButton::standard("Quiet").on_activate(|_| None));
        let mut dialog = SimpleDialog::new(props);

        dialog.activate(0, Trigger::Key(press(KeyCode::Enter)));
        dialog.activate(1, Trigger::Key(press(KeyCode::Enter)));
        dialog.activate(0, Trigger::Key(press(KeyCode::Enter)));

        let texts: Vec<_> = dialog.messages().iter().map(|m| m.text.clone()).collect();
        assert_eq!(texts, vec!["saved 1", "saved 2"]);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dismiss_removes_only_that_entry() {
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body")).with_button(
            DialogButton::standard("Check").on_activate(|_| Some(Message::error("Disk full"))),
        );
        let mut dialog = SimpleDialog::new(props);

        let first = dialog
            .activate(0, Trigger::Key(press(KeyCode::Enter)))
            .expect("first message");
        let second = dialog
            .activate(0, Trigger::Key(press(KeyCode::Enter)))
            .expect("second message");

        assert!(dialog.dismiss(&first));
        assert_eq!(dialog.messages().len(), 1);
        assert!(Arc::ptr_eq(dialog.messages().get(0).expect("remaining"), &second));

        assert!(!dialog.dismiss(&first));
        assert_eq!(dialog.messages().len(), 1);
    }

    #[test]
    fn test_handler_receives_descriptor_index_and_trigger() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body"))
            .with_button(DialogButton::standard("Hidden"))
            .with_button(DialogButton::primary("Go").on_activate(move |event| {
                recorder.lock().push(event.clone());
                None
            }));
        let mut dialog = SimpleDialog::new(props);

        let enter = press(KeyCode::Enter);
        assert_eq!(dialog.handle_key(enter), KeyDisposition::Handled);

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].index, 1);
        assert_eq!(seen[0].text, "Go");
        assert_eq!(seen[0].trigger, Trigger::Key(enter));
    }

    #[test]
    fn test_link_button_navigates_without_message() {
        let navigator = Arc::new(RecordingNavigator::default());
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body")).with_button(
            DialogButton::standard("Docs")
                .with_href("https://example.com/docs")
                .with_target("_blank"),
        );
        let mut dialog = SimpleDialog::new(props).with_navigator(navigator.clone());

        assert!(dialog.activate(0, Trigger::Key(press(KeyCode::Enter))).is_none());
        assert!(dialog.messages().is_empty());
        assert_eq!(
            *navigator.visits.lock(),
            vec![(
                "https://example.com/docs".to_string(),
                Some("_blank".to_string())
            )]
        );
    }

    #[test]
    fn test_focus_cycles_through_messages_and_buttons() {
        let counter = Arc::new(AtomicUsize::new(0));
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body"))
            .with_button(counting_button("Save", counter))
            .with_button(DialogButton::primary("Close").on_activate(|_| None));
        let mut dialog = SimpleDialog::new(props);
        assert_eq!(dialog.focus(), Some(Focus::Button(0)));

        dialog.handle_key(press(KeyCode::Enter));
        assert_eq!(dialog.focus_ring(), vec![Focus::Message(0), Focus::Button(0), Focus::Button(1)]);

        dialog.handle_key(press(KeyCode::Tab));
        assert_eq!(dialog.focus(), Some(Focus::Button(1)));
        dialog.handle_key(press(KeyCode::Tab));
        assert_eq!(dialog.focus(), Some(Focus::Message(0)));
        dialog.handle_key(press(KeyCode::BackTab));
        assert_eq!(dialog.focus(), Some(Focus::Button(1)));

        dialog.handle_key(press(KeyCode::Right));
        assert_eq!(dialog.focus(), Some(Focus::Message(0)));

        // Enter on a message dismisses it and focus falls back to the first button
        dialog.handle_key(press(KeyCode::Enter));
        assert!(dialog.messages().is_empty());
        assert_eq!(dialog.focus(), Some(Focus::Button(0)));
    }

    #[test]
    fn test_release_events_are_swallowed() {
        let counter = Arc::new(AtomicUsize::new(0));
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body"))
            .with_button(counting_button("Save", counter.clone()));
        let mut dialog = SimpleDialog::new(props);

        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(dialog.handle_key(release), KeyDisposition::Handled);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_messages_render_beneath_body_and_buttons_right_aligned() {
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body text").with_title("Title"))
            .with_button(DialogButton::standard("Cancel").on_activate(|_| None))
            .with_button(
                DialogButton::primary("Save")
                    .on_activate(|_| Some(Message::new(MessageSeverity::Success, "Saved"))),
            );
        let mut dialog = SimpleDialog::new(props);
        dialog.activate(1, Trigger::Key(press(KeyCode::Enter)));

        let lines = render_lines(&mut dialog, 80, 24);
        let row_of = |needle: &str| {
            lines
                .iter()
                .position(|line| line.contains(needle))
                .unwrap_or_else(|| panic!("{} not rendered", needle))
        };

        assert!(lines[row_of("Title")].contains("Title"));
        assert!(row_of("Body text") < row_of("Saved"));
        assert!(row_of("Saved") < row_of("Cancel"));

        let buttons = &lines[row_of("Cancel")];
        let cancel = buttons.find("Cancel").expect("cancel");
        let save = buttons.find("Save").expect("save");
        assert!(cancel < save);

        // Dialog spans columns 15..65; the last button ends just inside the padding
        let border = buttons.rfind('│').expect("dialog border");
        let save_end = buttons[..border].trim_end_matches(' ').len();
        assert!(border - save_end <= 3);
    }

    #[test]
    fn test_mouse_click_activates_and_dismisses() {
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body")).with_button(
            DialogButton::primary("Warn").on_activate(|_| Some(Message::warning("Careful"))),
        );
        let mut dialog = SimpleDialog::new(props);
        render_lines(&mut dialog, 80, 24);

        let (button_area, _) = dialog
            .hit_targets
            .iter()
            .find(|(_, target)| *target == HitTarget::Button(0))
            .copied()
            .expect("button hit area");
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: button_area.x + 1,
            row: button_area.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(dialog.handle_mouse(click), KeyDisposition::Handled);
        assert_eq!(dialog.messages().len(), 1);

        render_lines(&mut dialog, 80, 24);
        let (dismiss_area, _) = dialog
            .hit_targets
            .iter()
            .find(|(_, target)| *target == HitTarget::Dismiss(0))
            .copied()
            .expect("dismiss hit area");
        let click = MouseEvent {
            column: dismiss_area.x,
            row: dismiss_area.y,
            ..click
        };
        dialog.handle_mouse(click);
        assert!(dialog.messages().is_empty());
    }

    #[test]
    fn test_render_survives_more_message_rows_than_fit_in_u16() {
        let props = SimpleDialogProps::new(BaseDialogProps::new("Body"))
            .with_button(DialogButton::primary("Okay").on_activate(|_| None));
        let mut dialog = SimpleDialog::new(props);
        for _ in 0..70_000 {
            dialog.messages.push(Message::info("note"));
        }

        let screen = render_lines(&mut dialog, 80, 24).join("\n");
        assert!(screen.contains("Body"));
        assert!(screen.contains("note"));
        assert_eq!(clamp_rows(70_000), u16::MAX);
    }

    #[test]
    fn test_long_rich_message_wraps_inside_dialog() {
        let line = Line::from(vec![
            Span::styled("x".repeat(60), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("y".repeat(50)),
            Span::raw("END"),
        ]);
        let base = BaseDialogProps::new(Text::from(line));
        let mut dialog = SimpleDialog::new(SimpleDialogProps::new(base));

        let screen = render_lines(&mut dialog, 80, 24).join("\n");
        assert!(screen.contains("END"));
    }

    #[test]
    fn test_non_blocking_dialog_skips_backdrop() {
        let base = BaseDialogProps::new("Body").with_modal_overrides(ModalOverrides {
            is_blocking: Some(false),
            ..ModalOverrides::default()
        });
        let dialog = SimpleDialog::new(SimpleDialogProps::new(base));
        assert!(!dialog.is_blocking());
    }
}
