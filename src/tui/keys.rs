use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }

    /// Short key label such as `Ctrl+C` or `a`
    pub fn label(&self) -> String {
        let key = match self.key {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "Esc".to_string(),
            other => format!("{:?}", other),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key.to_uppercase())
        } else {
            key
        }
    }
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit application, always active
    pub quit: KeyBinding,

    /// Demo launcher bindings, active while no dialog is mounted
    pub open_alert: KeyBinding,
    pub open_confirm: KeyBinding,
    pub open_prompt: KeyBinding,
    pub open_labelled_prompt: KeyBinding,
    pub open_simple: KeyBinding,
    pub leave_demo: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit application"),
            open_alert: KeyBinding::new(KeyCode::Char('a'), KeyModifiers::NONE, "Show an alert"),
            open_confirm: KeyBinding::new(KeyCode::Char('c'), KeyModifiers::NONE, "Ask for confirmation"),
            open_prompt: KeyBinding::new(KeyCode::Char('p'), KeyModifiers::NONE, "Prompt for text"),
            open_labelled_prompt: KeyBinding::new(
                KeyCode::Char('l'),
                KeyModifiers::NONE,
                "Prompt with the message as its label",
            ),
            open_simple: KeyBinding::new(
                KeyCode::Char('s'),
                KeyModifiers::NONE,
                "Dialog with custom buttons",
            ),
            leave_demo: KeyBinding::new(KeyCode::Char('q'), KeyModifiers::NONE, "Leave the demo"),
        }
    }
}

impl KeyMap {
    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event)
    }

    /// Launcher bindings in display order
    pub fn demo_bindings(&self) -> [&KeyBinding; 6] {
        [
            &self.open_alert,
            &self.open_confirm,
            &self.open_prompt,
            &self.open_labelled_prompt,
            &self.open_simple,
            &self.leave_demo,
        ]
    }

    /// Get help text for the demo launcher
    pub fn help_text(&self) -> String {
        self.demo_bindings()
            .iter()
            .chain(std::iter::once(&&self.quit))
            .map(|binding| format!("{:>6}  {}", binding.label(), binding.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_quits_but_plain_c_does_not() {
        let keys = KeyMap::default();
        assert!(keys.should_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!keys.should_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(keys
            .open_confirm
            .matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_text_lists_every_binding() {
        let help = KeyMap::default().help_text();
        assert_eq!(help.lines().count(), 7);
        assert!(help.contains("Ctrl+C"));
    }
}
