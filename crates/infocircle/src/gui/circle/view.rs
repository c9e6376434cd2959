use super::model::{Rect, Scene};
use super::{
    CLOSE_FONT_SIZE, DETAIL_FONT_SIZE, ICON_FILL, ICON_SIZE, LINE_SPACING, ORBIT_LINE_WIDTH,
    PANEL_PADDING, TITLE_FONT_SIZE,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use orbit::{InfoPanel, Point};
use palette::Srgba;
use std::f64::consts::PI;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct ItemRenderer<'a> {
    title: &'a str,
    pixbuf: Option<&'a Pixbuf>,
    center: Point,
    radius: f64,
    selected: bool,
}

impl<'a> ItemRenderer<'a> {
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_circle(cr, colors)?;
        match self.pixbuf {
            Some(pixbuf) => self.draw_icon(cr, pixbuf),
            None => self.draw_initial(cr, colors),
        }
    }

    fn draw_circle(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_color(cr, if self.selected { colors.selected } else { colors.item });
        cr.arc(self.center.x, self.center.y, self.radius, 0.0, 2.0 * PI);
        cr.fill()
    }

    fn draw_icon(&self, cr: &Context, pixbuf: &Pixbuf) -> Result<(), cairo::Error> {
        // fit icon into the circle
        let icon_scale = (self.radius * 2.0 * ICON_FILL) / ICON_SIZE as f64;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );

        cr.save()?;
        cr.translate(self.center.x - iw / 2.0, self.center.y - ih / 2.0);
        cr.scale(icon_scale, icon_scale);
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint()?;
        cr.restore()
    }

    /// Fallback for items without an icon: the first letter of the title.
    fn draw_initial(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let Some(initial) = self.title.chars().next() else {
            return Ok(());
        };
        let text = initial.to_uppercase().to_string();

        set_color(cr, colors.text);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(self.radius);
        let ext = cr.text_extents(&text)?;
        cr.move_to(
            self.center.x - ext.width() / 2.0 - ext.x_bearing(),
            self.center.y - ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(&text)
    }
}

struct PanelRenderer<'a> {
    panel: &'a InfoPanel,
    bounds: Rect,
    close: Rect,
}

impl<'a> PanelRenderer<'a> {
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_color(cr, colors.panel);
        cr.rectangle(
            self.bounds.origin.x,
            self.bounds.origin.y,
            self.bounds.width,
            self.bounds.height,
        );
        cr.fill()?;

        let text_width = self.bounds.width - 2.0 * PANEL_PADDING;
        let x = self.bounds.origin.x + PANEL_PADDING;
        let mut y = self.bounds.origin.y + PANEL_PADDING;

        set_color(cr, colors.text);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(TITLE_FONT_SIZE);
        let title = self.panel.title.as_str();
        y = self.draw_lines(cr, title, x, y, text_width, TITLE_FONT_SIZE)?;

        y += PANEL_PADDING / 2.0;
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(DETAIL_FONT_SIZE);
        let detail = self.panel.detail.as_str();
        self.draw_lines(cr, detail, x, y, text_width, DETAIL_FONT_SIZE)?;

        self.draw_close(cr, colors)
    }

    /// Draws wrapped text starting at `y` and returns the y below the last
    /// line. Lines that would run into the close link are dropped.
    fn draw_lines(
        &self,
        cr: &Context,
        text: &str,
        x: f64,
        mut y: f64,
        max_width: f64,
        font_size: f64,
    ) -> Result<f64, cairo::Error> {
        let line_height = font_size * LINE_SPACING;
        let measure = |s: &str| cr.text_extents(s).map(|e| e.x_advance()).unwrap_or(0.0);

        for line in wrap(text, max_width, measure) {
            if y + line_height > self.close.origin.y {
                break;
            }
            y += line_height;
            cr.move_to(x, y - (line_height - font_size));
            cr.show_text(&line)?;
        }
        Ok(y)
    }

    fn draw_close(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let label = self.panel.close_label;
        set_color(cr, colors.link);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(CLOSE_FONT_SIZE);
        let ext = cr.text_extents(label)?;
        let c = self.close.center();
        let (x, y) = (c.x - ext.width() / 2.0, c.y + ext.height() / 2.0);
        cr.move_to(x, y);
        cr.show_text(label)?;

        // underline, it is a link
        cr.set_line_width(1.0);
        cr.move_to(x, y + 2.0);
        cr.line_to(x + ext.width(), y + 2.0);
        cr.stroke()
    }
}

/// Greedy word wrap. A single word wider than `max_width` gets its own line.
pub fn wrap(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn draw(cr: &Context, scene: &Scene, colors: &ThemeColors) -> Result<(), cairo::Error> {
    draw_orbit(cr, scene, colors)?;

    let animator = &scene.animator;
    for (i, item) in animator.items().iter().enumerate() {
        let Some(center) = scene.positions.center(i) else {
            continue;
        };
        ItemRenderer {
            title: item.title.as_str(),
            pixbuf: scene.pixbufs.get(i).and_then(Option::as_ref),
            center,
            radius: animator.item_radius(i),
            selected: animator.selected() == Some(i),
        }
        .draw(cr, colors)?;
    }

    if let Some(panel) = animator.info_panel() {
        PanelRenderer {
            panel: &panel,
            bounds: scene.panel_rect(),
            close: scene.close_rect(),
        }
        .draw(cr, colors)?;
    }
    Ok(())
}

fn draw_orbit(cr: &Context, scene: &Scene, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let geometry = scene.animator.settings().geometry;
    let center = geometry.center();
    set_color(cr, colors.orbit);
    cr.set_line_width(ORBIT_LINE_WIDTH);
    cr.arc(center.x, center.y, geometry.circle_radius, 0.0, 2.0 * PI);
    cr.stroke()
}
