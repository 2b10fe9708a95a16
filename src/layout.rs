use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Padding, Paragraph},
    Frame,
};

pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(Color::Rgb(255, 165, 0));
pub const BLURRED_BORDER_STYLE: Style = Style::new().fg(Color::White);
pub const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Rows/columns a box adds around its content on each side: one for the
/// border, one for padding.
const BOX_CHROME: u16 = 2;

/// Sizing rules for the field boxes. Immutable once the form is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub padding: i32,
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            padding: 2,
            min_width: 20,
            max_width: 50,
            min_height: 2,
            max_height: 5,
        }
    }
}

impl FormLayout {
    /// Content width of each box: viewport minus padding on both sides,
    /// clamped to [min_width, max_width].
    pub fn box_width(&self, viewport_width: u16) -> u16 {
        let w = i32::from(viewport_width) - 2 * self.padding;
        w.clamp(self.min_width, self.max_width) as u16
    }

    /// Content height of each box. The division truncates toward zero, so a
    /// very short viewport still lands on min_height.
    pub fn box_height(&self, viewport_height: u16) -> u16 {
        let h = (i32::from(viewport_height) - 10) / 2;
        h.clamp(self.min_height, self.max_height) as u16
    }
}

/// Title line followed by the field's own single-line view.
pub fn field_content(title: &str, view: Line<'static>) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(format!(" {title}"), TITLE_STYLE)),
        view,
    ])
}

/// Height of a box drawn around `content` with no size forced on it.
pub fn natural_height(content: &Text) -> u16 {
    (content.height() as u16).saturating_add(2 * BOX_CHROME)
}

pub fn field_block(focused: bool) -> Block<'static> {
    let (border_type, style) = if focused {
        (BorderType::Rounded, FOCUSED_BORDER_STYLE)
    } else {
        (BorderType::Plain, BLURRED_BORDER_STYLE)
    };
    Block::bordered()
        .border_type(border_type)
        .border_style(style)
        .padding(Padding::uniform(1))
}

/// A field box ready to draw.
pub struct FieldBox {
    pub content: Text<'static>,
    pub focused: bool,
}

/// Stack the boxes vertically and place the stack at the top-left of the
/// viewport. Each box's content area is `box_width` x `box_height`.
pub fn render_stack(
    frame: &mut Frame,
    viewport: Rect,
    boxes: Vec<FieldBox>,
    box_width: u16,
    box_height: u16,
) {
    let area = viewport.intersection(frame.area());
    let outer_width = box_width.saturating_add(2 * BOX_CHROME).min(area.width);
    let outer_height = box_height.saturating_add(2 * BOX_CHROME);

    let mut y = area.y;
    for field_box in boxes {
        if y >= area.bottom() {
            break;
        }
        let height = outer_height.min(area.bottom() - y);
        frame.render_widget(
            Paragraph::new(field_box.content).block(field_block(field_box.focused)),
            Rect::new(area.x, y, outer_width, height),
        );
        y = y.saturating_add(outer_height);
    }
}
