use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, RectPrimitive, RenderFrame, StrokeStyle, TextHAlign,
    TextPrimitive, estimate_text_width_px,
};

use super::explore_room::{ExploreRoom, InfoCardPresentation};
use super::hotspots::{HOTSPOT_ICON_COLOR, Hotspot};
use super::navigation::ACTIVE_ITEM_COLOR;

/// Lighter teal of labels and the card title (`#5eead4`).
const LABEL_COLOR: Color = Color::rgb(94.0 / 255.0, 234.0 / 255.0, 212.0 / 255.0);

const INSTRUCTION_TEXT: &str = "Click on an icon to explore";
const EXIT_TEXT: &str = "Exit Zoom";

const EDGE_INSET_PX: f64 = 20.0;
const INSTRUCTION_PADDING_PX: f64 = 16.0;
const INSTRUCTION_FONT_SIZE_PX: f64 = 18.0;
const HOTSPOT_LABEL_FONT_SIZE_PX: f64 = 14.0;
const HOTSPOT_LABEL_GAP_PX: f64 = 4.0;
const EXIT_FONT_SIZE_PX: f64 = 14.0;
const EXIT_PADDING_X_PX: f64 = 12.0;
const EXIT_HEIGHT_PX: f64 = 32.0;

const CARD_BOTTOM_PX: f64 = 64.0;
const CARD_PADDING_PX: f64 = 24.0;
const CARD_RADIUS_PX: f64 = 16.0;
const CARD_TITLE_FONT_SIZE_PX: f64 = 20.0;
const CARD_TITLE_LINE_PX: f64 = 28.0;
const CARD_TITLE_GAP_PX: f64 = 12.0;
const CARD_BODY_FONT_SIZE_PX: f64 = 16.0;
const CARD_BODY_LINE_PX: f64 = 26.0;

impl ExploreRoom {
    /// Overlay-level scene for the current state. The background media itself
    /// is host-drawn using [`ExploreRoom::background_transform`].
    pub fn build_render_frame(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        let (width, height) = (f64::from(viewport.width), f64::from(viewport.height));
        let mut frame = RenderFrame::new(viewport).with_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(0.0, 0.0, width, height, Color::BLACK.with_alpha(self.overlay_opacity())),
        );

        if self.instruction_visible() {
            frame.push_text(
                CanvasLayerKind::Series,
                TextPrimitive::new(
                    INSTRUCTION_TEXT,
                    EDGE_INSET_PX + INSTRUCTION_PADDING_PX,
                    EDGE_INSET_PX + INSTRUCTION_PADDING_PX + INSTRUCTION_FONT_SIZE_PX,
                    INSTRUCTION_FONT_SIZE_PX,
                    LABEL_COLOR,
                    TextHAlign::Left,
                )
                .with_weight(TextPrimitive::WEIGHT_BOLD),
            );
        }

        if self.hotspots_visible() {
            for hotspot in self.hotspots().iter() {
                append_hotspot(&mut frame, hotspot, width, height);
            }
        }

        if let (Some(card), Some(hotspot)) = (self.info_card(), self.card_hotspot()) {
            append_info_card(&mut frame, hotspot, card, width, height);
        }

        if self.exit_button_visible() {
            let button_width =
                estimate_text_width_px(EXIT_TEXT, EXIT_FONT_SIZE_PX) + 2.0 * EXIT_PADDING_X_PX;
            let left = width - EDGE_INSET_PX - button_width;
            frame.push_rect(
                CanvasLayerKind::Overlay,
                RectPrimitive::new(left, EDGE_INSET_PX, button_width, EXIT_HEIGHT_PX, ACTIVE_ITEM_COLOR)
                    .with_corner_radius(4.0),
            );
            frame.push_text(
                CanvasLayerKind::Overlay,
                TextPrimitive::new(
                    EXIT_TEXT,
                    left + button_width / 2.0,
                    EDGE_INSET_PX + EXIT_HEIGHT_PX / 2.0 + 0.35 * EXIT_FONT_SIZE_PX,
                    EXIT_FONT_SIZE_PX,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .with_weight(600),
            );
        }

        frame.validate()?;
        Ok(frame)
    }
}

/// Icon disc with its label centered underneath, the button's top-left
/// corner at the hotspot position.
fn append_hotspot(frame: &mut RenderFrame, hotspot: &Hotspot, width: f64, height: f64) {
    let left = width * hotspot.left_pct / 100.0;
    let top = height * hotspot.top_pct / 100.0;
    let size = hotspot.icon_size_px;
    let label_width = estimate_text_width_px(hotspot.label, HOTSPOT_LABEL_FONT_SIZE_PX);
    let center_x = left + size.max(label_width) / 2.0;

    frame.push_circle(
        CanvasLayerKind::Series,
        CirclePrimitive::new(center_x, top + size / 2.0, size / 2.0, Color::rgba(0.0, 0.0, 0.0, 0.0))
            .with_stroke(StrokeStyle::new(HOTSPOT_ICON_COLOR, 2.0)),
    );
    frame.push_text(
        CanvasLayerKind::Series,
        TextPrimitive::new(
            hotspot.label,
            center_x,
            top + size + HOTSPOT_LABEL_GAP_PX + HOTSPOT_LABEL_FONT_SIZE_PX,
            HOTSPOT_LABEL_FONT_SIZE_PX,
            LABEL_COLOR,
            TextHAlign::Center,
        )
        .with_weight(600),
    );
}

/// Card width follows the viewport breakpoints: 11/12 on narrow screens,
/// 2/3 from 768 px and 1/2 from 1024 px.
#[must_use]
pub fn info_card_width(viewport_width: f64) -> f64 {
    let fraction = if viewport_width >= 1024.0 {
        1.0 / 2.0
    } else if viewport_width >= 768.0 {
        2.0 / 3.0
    } else {
        11.0 / 12.0
    };
    viewport_width * fraction
}

/// Greedy word wrap against the estimated text width.
#[must_use]
pub fn wrap_text(text: &str, max_width_px: f64, font_size_px: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if estimate_text_width_px(&candidate, font_size_px) <= max_width_px {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn append_info_card(
    frame: &mut RenderFrame,
    hotspot: &Hotspot,
    card: InfoCardPresentation,
    width: f64,
    height: f64,
) {
    let card_width = info_card_width(width);
    let lines = wrap_text(
        hotspot.info,
        (card_width - 2.0 * CARD_PADDING_PX).max(0.0),
        CARD_BODY_FONT_SIZE_PX,
    );
    let card_height = 2.0 * CARD_PADDING_PX
        + CARD_TITLE_LINE_PX
        + CARD_TITLE_GAP_PX
        + CARD_BODY_LINE_PX * lines.len() as f64;

    // Scale around the resting center, then apply the entrance offset.
    let center_x = width / 2.0;
    let center_y = height - CARD_BOTTOM_PX - card_height / 2.0 + card.offset_y_px;
    let scaled = |dx: f64, dy: f64| (center_x + dx * card.scale, center_y + dy * card.scale);
    let alpha = card.opacity.clamp(0.0, 1.0);

    let (left, top) = scaled(-card_width / 2.0, -card_height / 2.0);
    frame.push_rect(
        CanvasLayerKind::Overlay,
        RectPrimitive::new(
            left,
            top,
            card_width * card.scale,
            card_height * card.scale,
            Color::WHITE.with_alpha(0.1 * alpha),
        )
        .with_corner_radius(CARD_RADIUS_PX * card.scale)
        .with_stroke(StrokeStyle::new(ACTIVE_ITEM_COLOR.with_alpha(0.4 * alpha), 1.0)),
    );

    let text_left = -card_width / 2.0 + CARD_PADDING_PX;
    let title_top = -card_height / 2.0 + CARD_PADDING_PX;
    let (title_x, title_y) = scaled(text_left, title_top + CARD_TITLE_FONT_SIZE_PX);
    frame.push_text(
        CanvasLayerKind::Overlay,
        TextPrimitive::new(
            hotspot.label,
            title_x,
            title_y,
            CARD_TITLE_FONT_SIZE_PX * card.scale,
            LABEL_COLOR.with_alpha(alpha),
            TextHAlign::Left,
        )
        .with_weight(TextPrimitive::WEIGHT_BOLD),
    );

    let body_top = title_top + CARD_TITLE_LINE_PX + CARD_TITLE_GAP_PX;
    for (row, line) in lines.into_iter().enumerate() {
        let baseline = body_top + CARD_BODY_LINE_PX * row as f64 + CARD_BODY_FONT_SIZE_PX;
        let (x, y) = scaled(text_left, baseline);
        frame.push_text(
            CanvasLayerKind::Overlay,
            TextPrimitive::new(
                line,
                x,
                y,
                CARD_BODY_FONT_SIZE_PX * card.scale,
                Color::WHITE.with_alpha(alpha),
                TextHAlign::Left,
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{info_card_width, wrap_text};
    use crate::render::estimate_text_width_px;

    #[test]
    fn wrapped_lines_fit_and_keep_every_word() {
        let text = "Prolonged screen time has been linked to anxiety and sleep issues.";
        let lines = wrap_text(text, 200.0, 16.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(estimate_text_width_px(line, 16.0) <= 200.0 || !line.contains(' '));
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn card_width_follows_breakpoints() {
        assert_eq!(info_card_width(1200.0), 600.0);
        assert_eq!(info_card_width(900.0), 600.0);
        assert!((info_card_width(600.0) - 550.0).abs() < 1e-9);
    }
}
