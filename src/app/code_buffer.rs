use crate::button::PropertySnapshot;

/// Editable text mirror of the current snapshot for the code panel.
///
/// While unfocused the text always tracks the snapshot. While focused the
/// text belongs to the user; edits that parse become new snapshots, edits that
/// don't are kept as text only and the parse error is exposed as a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBuffer {
    text: String,
    focused: bool,
    parse_error: Option<String>,
}

impl CodeBuffer {
    pub fn new(snapshot: &PropertySnapshot) -> Self {
        Self {
            text: snapshot.to_code(),
            focused: false,
            parse_error: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Last parse failure of a focused edit, cleared by the next valid edit or blur.
    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    pub fn focus(&mut self) -> bool {
        if self.focused {
            return false;
        }
        self.focused = true;
        true
    }

    pub fn blur(&mut self, snapshot: &PropertySnapshot) -> bool {
        if !self.focused {
            return false;
        }
        self.focused = false;
        self.parse_error = None;
        self.sync(snapshot);
        true
    }

    /// Re-derive the text from `snapshot` unless the user is editing.
    pub fn sync(&mut self, snapshot: &PropertySnapshot) -> bool {
        if self.focused {
            return false;
        }
        let text = snapshot.to_code();
        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }

    /// Store a focused edit and return the snapshot it parses to. Edits while
    /// unfocused are ignored.
    pub fn edit(&mut self, text: String) -> Option<PropertySnapshot> {
        if !self.focused {
            tracing::debug!("ignoring code edit while panel is unfocused");
            return None;
        }

        let parsed = PropertySnapshot::from_code(&text);
        self.text = text;
        match parsed {
            Ok(snapshot) => {
                self.parse_error = None;
                Some(snapshot)
            }
            Err(err) => {
                tracing::debug!(%err, "code edit does not parse; keeping previous snapshot");
                self.parse_error = Some(err.to_string());
                None
            }
        }
    }
}
