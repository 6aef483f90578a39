use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DEFAULT_ALERT_TITLE: &str = "Alert";
pub const ACKNOWLEDGE_LABEL: &str = "OK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ModalSize {
    /// Outer width in columns when drawn on a terminal.
    pub fn width(&self) -> usize {
        match self {
            ModalSize::Sm => 40,
            ModalSize::Md => 60,
            ModalSize::Lg => 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
}

impl Action {
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
        }
    }
}

/// Generic modal container the dialogs are composed into.
pub trait Modal {
    fn open(&mut self);
    fn close(&mut self);
    fn is_open(&self) -> bool;
    fn set_size(&mut self, size: ModalSize);
    fn set_title(&mut self, title: &str);
    fn set_body(&mut self, body: &str);
    fn set_footer(&mut self, actions: &[Action]);
}

/// Small modal showing a message with a single acknowledgement button.
pub struct AlertDialog<F: FnMut()> {
    pub is_open: bool,
    pub title: Option<String>,
    pub description: String,
    on_close: F,
}

impl<F: FnMut()> AlertDialog<F> {
    pub fn new(is_open: bool, description: impl ToString, on_close: F) -> Self {
        Self {
            is_open,
            title: None,
            description: description.to_string(),
            on_close,
        }
    }

    pub fn title(mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn render(&self, modal: &mut impl Modal) {
        modal.set_size(ModalSize::Sm);
        modal.set_title(self.title.as_deref().unwrap_or(DEFAULT_ALERT_TITLE));
        modal.set_body(&self.description);
        modal.set_footer(&[Action::new(ACKNOWLEDGE_LABEL)]);

        if self.is_open {
            modal.open();
        } else {
            modal.close();
        }
    }

    /// Handle a press on the acknowledgement button.
    pub fn acknowledge(&mut self, modal: &mut impl Modal) {
        (self.on_close)();
        modal.close();
    }
}

/// Modal drawn as a text box on a terminal stream.
pub struct TextModal<W: Write> {
    writer: W,
    open: bool,
    size: ModalSize,
    title: String,
    body: String,
    footer: Vec<Action>,
}

impl<W: Write> TextModal<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            open: false,
            size: ModalSize::default(),
            title: String::new(),
            body: String::new(),
            footer: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn draw(&mut self) -> std::io::Result<()> {
        let inner = self.size.width() - 4;
        let border = format!("+{}+", "-".repeat(inner + 2));

        let mut lines = vec![border.clone()];
        lines.extend(
            wrap(&self.title, inner).map(|line| format!("| {} |", pad_end(&line, inner))),
        );
        lines.push(border.clone());
        lines.extend(
            wrap(&self.body, inner).map(|line| format!("| {} |", pad_end(&line, inner))),
        );
        if !self.footer.is_empty() {
            let buttons = self
                .footer
                .iter()
                .map(|action| format!("[{}]", action.label))
                .collect::<Vec<String>>()
                .join(" ");
            lines.push(border.clone());
            let padding = " ".repeat(inner.saturating_sub(buttons.width()));
            lines.push(format!("| {}{} |", padding, buttons));
        }
        lines.push(border);

        for line in lines {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()
    }
}

/// Pad `line` with spaces up to `width` terminal columns.
fn pad_end(line: &str, width: usize) -> String {
    format!("{}{}", line, " ".repeat(width.saturating_sub(line.width())))
}

/// Split `text` into lines of at most `width` terminal columns. Wide characters count as two.
fn wrap(text: &str, width: usize) -> impl Iterator<Item = String> + '_ {
    text.lines().flat_map(move |line| {
        let mut lines = vec![String::new()];
        let mut used = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && used > 0 {
                lines.push(String::new());
                used = 0;
            }
            if let Some(current) = lines.last_mut() {
                current.push(c);
            }
            used += w;
        }
        lines
    })
}

impl<W: Write> Modal for TextModal<W> {
    fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        if let Err(e) = self.draw() {
            tracing::error!("failed to draw modal: {}", e);
        }
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn set_size(&mut self, size: ModalSize) {
        self.size = size;
    }

    fn set_title(&mut self, title: &str) {
        self.title = String::from(title);
    }

    fn set_body(&mut self, body: &str) {
        self.body = String::from(body);
    }

    fn set_footer(&mut self, actions: &[Action]) {
        self.footer = actions.to_vec();
    }
}
