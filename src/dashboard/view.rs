//! The multi-section compendium dashboard
//!
//! Layout happens every frame against the supplied bounds (immediate-mode
//! discipline); the formatted section data is cached on activation and only
//! changes when the catalog or bound content changes.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::compendium::Compendium;
use crate::theme::{self, Color, mix, palette};

use super::content::ViewContent;
use super::format::{count_label, join_affinities, title_case};
use super::scene::{Anchor, Corners, FontRole, Rect, Scene};

/// Shared single-threaded handle to the catalog
pub type CompendiumHandle = Rc<RefCell<Compendium>>;

/// How many top souls get a spotlight card
pub const SPOTLIGHT_COUNT: usize = 3;
/// How many affinities the distribution list shows
pub const AFFINITY_ROW_COUNT: usize = 7;

const SECTION_PADDING: f32 = 28.0;
const HERO_MIN_HEIGHT: f32 = 280.0;
const HERO_CORNER_RADIUS: f32 = 28.0;
const PANEL_CORNER_RADIUS: f32 = 22.0;
const CARD_CORNER_RADIUS: f32 = 20.0;
const CARD_SPACING: f32 = 22.0;
const SUMMARY_CARD_HEIGHT: f32 = 150.0;
const ROW_SPACING: f32 = 14.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_MAX_WIDTH: f32 = 240.0;
const BULLET_RADIUS: f32 = 5.0;

const REALM_MILESTONES: [(&str, &str); 6] = [
    ("Mortal Realm", "60\u{2013}80 years of tempered living"),
    ("Qi Condensation", "Sense and guide the world's breath"),
    ("Foundation Establishment", "Forge a stable spiritual core"),
    ("Core Formation", "Ascend toward true cultivation might"),
    ("Nascent Soul", "Manifest a guiding spiritual avatar"),
    ("Ascendant", "Break mortal limits and traverse the heavens"),
];

#[derive(Debug, Clone)]
struct SummaryCard {
    label: String,
    value: String,
    caption: String,
    accent: Color,
}

#[derive(Debug, Clone)]
struct SpotlightCard {
    /// `None` for the awaiting-data placeholder
    soul: Option<(String, i32)>,
    accent: Color,
    title: String,
    meta: String,
    description: String,
    /// Empty when the card carries no grade badge
    badge: String,
}

impl SpotlightCard {
    fn title_role(&self) -> FontRole {
        if self.soul.is_some() {
            FontRole::Heading
        } else {
            FontRole::Paragraph
        }
    }
}

#[derive(Debug, Clone)]
struct LabelValueRow {
    label: String,
    value: String,
}

/// Dashboard panel over a shared compendium handle
pub struct DashboardView {
    id: String,
    content: ViewContent,
    compendium: CompendiumHandle,
    data_available: bool,

    accent: Color,
    gradient_start: Color,
    gradient_end: Color,

    summary_cards: Vec<SummaryCard>,
    spotlights: Vec<SpotlightCard>,
    affinity_rows: Vec<LabelValueRow>,
    grade_rows: Vec<LabelValueRow>,
    realm_rows: Vec<LabelValueRow>,
    guide_paragraphs: Vec<String>,
    dataset_summary: String,
    dataset_path: String,

    primary_action_rect: Option<Rect>,
    active_spotlight: usize,
}

impl DashboardView {
    pub fn new(id: impl Into<String>, compendium: CompendiumHandle) -> Self {
        Self {
            id: id.into(),
            content: ViewContent::default(),
            compendium,
            data_available: false,
            accent: palette::DEFAULT_ACCENT,
            gradient_start: palette::HERO_GRADIENT_START,
            gradient_end: palette::HERO_GRADIENT_END,
            summary_cards: Vec::new(),
            spotlights: Vec::new(),
            affinity_rows: Vec::new(),
            grade_rows: Vec::new(),
            realm_rows: Vec::new(),
            guide_paragraphs: Vec::new(),
            dataset_summary: String::new(),
            dataset_path: String::new(),
            primary_action_rect: None,
            active_spotlight: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the bound display content and reset interaction state
    pub fn bind_content(&mut self, content: ViewContent) {
        self.content = content;
        self.primary_action_rect = None;
        self.active_spotlight = 0;
    }

    /// Lazily load the default catalog, resolve bound colors and rebuild the
    /// cached section data
    pub fn activate(&mut self) {
        {
            let mut compendium = self.compendium.borrow_mut();
            if !compendium.is_loaded() {
                if compendium.load_default().is_err() {
                    log::info!("dashboard starting without catalog data");
                }
            }
            self.data_available = compendium.is_loaded();
        }

        self.resolve_colors();
        self.rebuild_sections();
    }

    /// Drop the cached section data (built again on the next activation)
    pub fn deactivate(&mut self) {
        self.summary_cards.clear();
        self.spotlights.clear();
        self.affinity_rows.clear();
        self.grade_rows.clear();
        self.realm_rows.clear();
        self.guide_paragraphs.clear();
        self.primary_action_rect = None;
    }

    /// Where the primary action button landed in the last build
    pub fn primary_action_rect(&self) -> Option<Rect> {
        self.primary_action_rect
    }

    /// Status line for the current spotlight, then advance the rotation
    pub fn on_primary_action(&mut self) -> String {
        if !self.spotlights.is_empty() {
            if self.active_spotlight >= self.spotlights.len() {
                self.active_spotlight = 0;
            }
            let status = match &self.spotlights[self.active_spotlight].soul {
                Some((name, grade)) => {
                    format!("Codex spotlight: {name} (Grade {grade}) ready for briefing.")
                }
                None => "Codex overview ready.".to_owned(),
            };
            self.active_spotlight = (self.active_spotlight + 1) % self.spotlights.len();
            status
        } else if self.data_available {
            "Martial soul compendium synchronized.".to_owned()
        } else {
            "No martial soul data available.".to_owned()
        }
    }

    /// Lay out one frame of the dashboard inside `bounds`
    pub fn build(&mut self, bounds: Rect) -> Scene {
        let mut scene = Scene::new();
        self.primary_action_rect = None;
        if bounds.is_empty() {
            return scene;
        }

        let hero = self.build_hero(&mut scene, bounds);

        let summary_top = hero.bottom() + 24.0;
        let summary_bottom = self.build_summary_row(&mut scene, summary_top, bounds.x, bounds.w);

        let compendium_top = summary_bottom + 30.0;
        let compendium_bounds = Rect::new(
            bounds.x + SECTION_PADDING,
            compendium_top,
            bounds.w - SECTION_PADDING * 2.0,
            0.0,
        );
        let compendium_bottom = self.build_compendium(&mut scene, compendium_bounds);

        scene.set_content_height(compendium_bottom + SECTION_PADDING - bounds.y);
        scene
    }

    fn resolve_colors(&mut self) {
        self.accent =
            Color::parse_hex(&self.content.accent_color).unwrap_or(palette::FALLBACK_ACCENT);
        self.gradient_start =
            Color::parse_hex(&self.content.hero_gradient[0]).unwrap_or(self.accent);
        self.gradient_end = Color::parse_hex(&self.content.hero_gradient[1])
            .unwrap_or_else(|| mix(self.accent, self.gradient_start, 0.35));
    }

    fn rebuild_sections(&mut self) {
        self.build_summary_cards();
        self.build_spotlight_cards();
        self.build_distribution_rows();
        self.build_realm_rows();

        self.guide_paragraphs = self
            .content
            .guide_paragraphs()
            .into_iter()
            .map(str::to_owned)
            .collect();

        let compendium = self.compendium.borrow();
        self.dataset_summary = if self.data_available {
            let summary = compendium.summary();
            format!(
                "{} catalogued souls \u{2022} {} affinities tracked",
                summary.total_souls,
                summary.affinity_names.len()
            )
        } else {
            "Load a martial soul catalog to populate the codex.".to_owned()
        };
        self.dataset_path = match compendium.source_path() {
            Some(path) => format!("Data source: {}", path.display()),
            None => "Data source unavailable".to_owned(),
        };
    }

    fn build_summary_cards(&mut self) {
        self.summary_cards.clear();

        if !self.data_available {
            self.summary_cards.push(SummaryCard {
                label: "Awaiting sync".to_owned(),
                value: "\u{2014}".to_owned(),
                caption: "Load a catalog to populate the codex.".to_owned(),
                accent: mix(self.accent, Color::rgb8(40, 32, 68), 0.5),
            });
            self.summary_cards.push(SummaryCard {
                label: "Highlight".to_owned(),
                value: "Dormant".to_owned(),
                caption: "No martial souls cached in this session yet.".to_owned(),
                accent: mix(self.accent, Color::rgb8(30, 45, 82), 0.4),
            });
            self.summary_cards.push(SummaryCard {
                label: "Affinities".to_owned(),
                value: "0".to_owned(),
                caption: "Elemental spectrum unavailable.".to_owned(),
                accent: mix(self.accent, Color::rgb8(18, 32, 64), 0.6),
            });
            return;
        }

        let compendium = self.compendium.borrow();
        let summary = compendium.summary();

        let dominant_affinity = summary
            .affinity_counts
            .first()
            .map(|(name, _)| title_case(name))
            .unwrap_or_else(|| "\u{2014}".to_owned());

        self.summary_cards.push(SummaryCard {
            label: "Martial souls".to_owned(),
            value: summary.total_souls.to_string(),
            caption: "Spirit records synced from the soul catalog.".to_owned(),
            accent: mix(self.accent, Color::rgb8(76, 100, 196), 0.35),
        });
        self.summary_cards.push(SummaryCard {
            label: "High-grade focus".to_owned(),
            value: format!("Grade {}", summary.highest_grade),
            caption: if summary.highest_soul_name.is_empty() {
                "Awaiting discoveries.".to_owned()
            } else {
                summary.highest_soul_name.clone()
            },
            accent: mix(self.accent, Color::rgb8(180, 130, 255), 0.42),
        });
        self.summary_cards.push(SummaryCard {
            label: "Affinity spectrum".to_owned(),
            value: dominant_affinity,
            caption: format!(
                "{} elemental lineages observed",
                summary.affinity_names.len()
            ),
            accent: mix(self.accent, Color::rgb8(88, 150, 255), 0.38),
        });
    }

    fn build_spotlight_cards(&mut self) {
        self.spotlights.clear();

        if !self.data_available {
            self.spotlights.push(SpotlightCard {
                soul: None,
                accent: mix(self.accent, Color::rgb8(24, 20, 40), 0.6),
                title: "The codex will highlight signature martial souls here.".to_owned(),
                meta: "Waiting for sync".to_owned(),
                description: String::new(),
                badge: String::new(),
            });
            return;
        }

        let compendium = self.compendium.borrow();
        for soul in compendium.top_souls(SPOTLIGHT_COUNT) {
            let base_accent = soul
                .affinities
                .first()
                .and_then(|affinity| theme::affinity_color(affinity))
                .unwrap_or(self.accent);

            let affinity_text = join_affinities(&soul.affinities);
            let mut meta = title_case(&soul.category);
            if !meta.is_empty() && !affinity_text.is_empty() {
                meta.push_str(" \u{2022} ");
            }
            meta.push_str(&affinity_text);

            self.spotlights.push(SpotlightCard {
                soul: Some((soul.name.clone(), soul.grade)),
                accent: mix(base_accent, self.accent, 0.4),
                title: soul.name.clone(),
                meta,
                description: soul.description.clone(),
                badge: format!("Grade {}", soul.grade),
            });
        }
    }

    fn build_distribution_rows(&mut self) {
        self.affinity_rows.clear();
        self.grade_rows.clear();

        if self.data_available {
            let compendium = self.compendium.borrow();
            for (affinity, count) in compendium.top_affinities(AFFINITY_ROW_COUNT) {
                self.affinity_rows.push(LabelValueRow {
                    label: title_case(&affinity),
                    value: count_label(count, "soul", "souls"),
                });
            }
            for &(grade, count) in compendium.grade_counts_descending() {
                self.grade_rows.push(LabelValueRow {
                    label: format!("Grade {grade}"),
                    value: count_label(count, "entry", "entries"),
                });
            }
        }

        if self.affinity_rows.is_empty() {
            self.affinity_rows.push(LabelValueRow {
                label: "Pending sync".to_owned(),
                value: "No affinities loaded".to_owned(),
            });
        }
        if self.grade_rows.is_empty() {
            self.grade_rows.push(LabelValueRow {
                label: "Unknown".to_owned(),
                value: "Awaiting martial soul data".to_owned(),
            });
        }
    }

    fn build_realm_rows(&mut self) {
        self.realm_rows = REALM_MILESTONES
            .iter()
            .map(|&(realm, description)| LabelValueRow {
                label: realm.to_owned(),
                value: description.to_owned(),
            })
            .collect();
    }

    fn build_hero(&mut self, scene: &mut Scene, bounds: Rect) -> Rect {
        let hero = Rect::new(
            bounds.x + SECTION_PADDING,
            bounds.y + SECTION_PADDING,
            bounds.w - SECTION_PADDING * 2.0,
            (bounds.h / 3.0).max(HERO_MIN_HEIGHT),
        );
        if hero.is_empty() {
            return hero;
        }

        scene.fill_rounded_rect(hero, HERO_CORNER_RADIUS, self.accent.with_alpha(235.0 / 255.0));

        let inner = hero.inset(4.0);
        scene.fill_rounded_rect(
            inner,
            HERO_CORNER_RADIUS - 4.0,
            mix(self.gradient_start, self.gradient_end, 0.45).with_alpha(240.0 / 255.0),
        );

        let overlay_top = Rect::new(
            inner.x + 6.0,
            inner.y + 6.0,
            inner.w - 12.0,
            inner.h / 2.0,
        );
        scene.rounded_corners(
            overlay_top,
            HERO_CORNER_RADIUS - 6.0,
            Corners::TOP,
            mix(self.gradient_start, Color::WHITE, 0.12).with_alpha(200.0 / 255.0),
        );

        let overlay_bottom = Rect::new(
            inner.x + 6.0,
            inner.y + inner.h / 2.0,
            inner.w - 12.0,
            inner.h / 2.0 - 6.0,
        );
        scene.rounded_corners(
            overlay_bottom,
            HERO_CORNER_RADIUS - 6.0,
            Corners::BOTTOM,
            mix(self.gradient_end, self.accent, 0.25).with_alpha(220.0 / 255.0),
        );

        let accent_bar = Rect::new(inner.x, inner.y + 12.0, 6.0, inner.h - 24.0);
        scene.fill_rect(accent_bar, self.accent);

        let content_padding = 28.0;
        let left_width = inner.w * 5.0 / 9.0;
        let left = Rect::new(
            inner.x + content_padding,
            inner.y + content_padding,
            left_width - content_padding,
            inner.h - content_padding * 2.0,
        );
        let right_x = inner.x + left_width + content_padding / 2.0;
        let right = Rect::new(
            right_x,
            inner.y + content_padding,
            inner.right() - content_padding - right_x,
            inner.h - content_padding * 2.0,
        );

        let mut cursor = left.y;
        scene.text(
            self.content.heading(),
            FontRole::Heading,
            palette::HERO_TEXT,
            Vec2::new(left.x, cursor),
            Anchor::TopLeft,
            left.w,
        );
        cursor += FontRole::Heading.line_height() + 14.0;

        scene.text(
            self.content.tagline(),
            FontRole::Paragraph,
            palette::MUTED_TEXT,
            Vec2::new(left.x, cursor),
            Anchor::TopLeft,
            left.w,
        );
        cursor += FontRole::Paragraph.line_height() + 18.0;

        let highlights: Vec<String> = self.content.highlights().map(str::to_owned).collect();
        for line in &highlights {
            scene.circle(
                Vec2::new(left.x + BULLET_RADIUS, cursor + BULLET_RADIUS),
                BULLET_RADIUS,
                self.accent,
            );
            scene.text(
                line,
                FontRole::Paragraph,
                palette::HERO_TEXT,
                Vec2::new(left.x + 18.0, cursor - 4.0),
                Anchor::TopLeft,
                left.w - 18.0,
            );
            cursor += FontRole::Paragraph.line_height() + 20.0;
        }

        scene.text(
            self.dataset_summary.clone(),
            FontRole::Button,
            palette::MUTED_TEXT,
            Vec2::new(left.x, left.bottom() - 110.0),
            Anchor::TopLeft,
            left.w,
        );

        let button = Rect::new(
            left.x,
            left.bottom() - BUTTON_HEIGHT,
            BUTTON_MAX_WIDTH.min(left.w),
            BUTTON_HEIGHT,
        );
        scene.fill_rounded_rect(button, BUTTON_HEIGHT / 2.0, self.accent);
        scene.stroke_rounded_rect(button, BUTTON_HEIGHT / 2.0, mix(self.accent, Color::WHITE, 0.2));
        scene.text(
            self.content.primary_action_label(),
            FontRole::Button,
            palette::HERO_TEXT,
            Vec2::new(
                button.x + button.w / 2.0,
                button.y + (button.h - FontRole::Button.line_height()) / 2.0,
            ),
            Anchor::TopCenter,
            button.w,
        );
        self.primary_action_rect = Some(button);

        let mut right_cursor = right.y;
        scene.text(
            self.dataset_path.clone(),
            FontRole::Paragraph,
            palette::FAINT_TEXT,
            Vec2::new(right.x, right_cursor),
            Anchor::TopLeft,
            right.w,
        );
        right_cursor += FontRole::Paragraph.line_height() + 16.0;

        if let Some(spotlight) = self.spotlights.first() {
            let badge_rect = Rect::new(right.x, right_cursor, 120.0, 36.0);
            scene.fill_rounded_rect(
                badge_rect,
                badge_rect.h / 2.0,
                mix(spotlight.accent, Color::BLACK, 0.25).with_alpha(230.0 / 255.0),
            );
            if !spotlight.badge.is_empty() {
                scene.text(
                    spotlight.badge.clone(),
                    FontRole::Button,
                    Color::WHITE,
                    Vec2::new(
                        badge_rect.x + badge_rect.w / 2.0,
                        badge_rect.y + (badge_rect.h - FontRole::Button.line_height()) / 2.0,
                    ),
                    Anchor::TopCenter,
                    badge_rect.w,
                );
            }
            right_cursor += badge_rect.h + 12.0;

            let title_role = spotlight.title_role();
            scene.text(
                spotlight.title.clone(),
                title_role,
                palette::HERO_TEXT,
                Vec2::new(right.x, right_cursor),
                Anchor::TopLeft,
                right.w,
            );
            right_cursor += title_role.line_height() + 8.0;

            scene.text(
                spotlight.meta.clone(),
                FontRole::Button,
                Color::rgb8(233, 234, 247),
                Vec2::new(right.x, right_cursor),
                Anchor::TopLeft,
                right.w,
            );
            right_cursor += FontRole::Button.line_height() + 12.0;

            if !spotlight.description.is_empty() {
                scene.text(
                    spotlight.description.clone(),
                    FontRole::Paragraph,
                    palette::HERO_TEXT,
                    Vec2::new(right.x, right_cursor),
                    Anchor::TopLeft,
                    right.w,
                );
            }
        }

        scene.fill_rect(right, palette::SOFT_HIGHLIGHT);

        hero
    }

    fn build_summary_row(&mut self, scene: &mut Scene, top: f32, origin_x: f32, width: f32) -> f32 {
        if self.summary_cards.is_empty() {
            return top;
        }

        let count = self.summary_cards.len() as f32;
        let available = width - SECTION_PADDING * 2.0 - CARD_SPACING * (count - 1.0);
        let card_width = available / count;

        let mut card_rect = Rect::new(
            origin_x + SECTION_PADDING,
            top,
            card_width,
            SUMMARY_CARD_HEIGHT,
        );
        for card in &self.summary_cards {
            scene.fill_rounded_rect(
                card_rect,
                CARD_CORNER_RADIUS,
                card.accent.with_alpha(230.0 / 255.0),
            );
            let inner = card_rect.inset(18.0);
            scene.fill_rect(inner, palette::MUTED_OVERLAY);

            let mut cursor = inner.y;
            scene.text(
                card.label.clone(),
                FontRole::Button,
                palette::LABEL_TEXT,
                Vec2::new(inner.x, cursor),
                Anchor::TopLeft,
                inner.w,
            );
            cursor += FontRole::Button.line_height() + 10.0;

            scene.text(
                card.value.clone(),
                FontRole::Heading,
                Color::WHITE,
                Vec2::new(inner.x, cursor),
                Anchor::TopLeft,
                inner.w,
            );
            cursor += FontRole::Heading.line_height() + 12.0;

            scene.text(
                card.caption.clone(),
                FontRole::Paragraph,
                palette::LABEL_TEXT,
                Vec2::new(inner.x, cursor),
                Anchor::TopLeft,
                inner.w,
            );

            card_rect.x += card_rect.w + CARD_SPACING;
        }

        top + SUMMARY_CARD_HEIGHT
    }

    /// Spotlight cards on the left, distribution column on the right.
    /// Returns the bottom edge of the taller column.
    fn build_compendium(&mut self, scene: &mut Scene, bounds: Rect) -> f32 {
        if bounds.w <= 0.0 {
            return bounds.y;
        }

        let column_spacing = 28.0;
        let left_width = bounds.w * 0.6;
        let left = Rect::new(bounds.x, bounds.y, left_width - column_spacing / 2.0, 0.0);
        let right = Rect::new(
            bounds.x + left_width + column_spacing / 2.0,
            bounds.y,
            bounds.w - left_width - column_spacing / 2.0,
            0.0,
        );

        let mut cursor = left.y;
        for card in &self.spotlights {
            let card_rect = Rect::new(left.x, cursor, left.w, 0.0);
            let used = build_soul_card(scene, card_rect, card);
            cursor += used + CARD_SPACING;
        }
        let left_bottom = cursor - CARD_SPACING;

        let right_bottom = self.build_distribution_column(scene, right);

        left_bottom.max(right_bottom)
    }

    /// Height the right column needs: titles, rows, paragraphs, realm rows
    fn distribution_column_height(&self) -> f32 {
        let title = FontRole::Heading.line_height() + 12.0;
        let row = FontRole::Button.line_height() + ROW_SPACING;

        let mut height = 16.0 * 2.0;
        height += title + self.affinity_rows.len() as f32 * row;
        height += 10.0 + title + self.grade_rows.len() as f32 * row;
        height += 8.0 + title;
        height += self
            .guide_paragraphs
            .len()
            .max(1) as f32
            * (FontRole::Paragraph.line_height() + ROW_SPACING);
        height += 8.0 + title;
        height += self.realm_rows.len() as f32
            * (FontRole::Button.line_height()
                + 6.0
                + FontRole::Paragraph.line_height()
                + ROW_SPACING);
        height
    }

    fn build_distribution_column(&mut self, scene: &mut Scene, rect: Rect) -> f32 {
        let panel = Rect::new(rect.x, rect.y, rect.w, self.distribution_column_height());
        scene.fill_rounded_rect(
            panel,
            PANEL_CORNER_RADIUS,
            self.accent.with_alpha(210.0 / 255.0),
        );
        let inner = panel.inset(16.0);
        scene.fill_rect(inner, palette::MUTED_OVERLAY);

        let mut cursor = inner.y;
        cursor = self.build_column_title(scene, &inner, cursor, "Affinity distribution");
        for row in self.affinity_rows.clone() {
            cursor = build_label_value_row(scene, &inner, cursor, &row);
        }

        cursor += 10.0;
        cursor = self.build_column_title(scene, &inner, cursor, "Grade ladder");
        for row in self.grade_rows.clone() {
            cursor = build_label_value_row(scene, &inner, cursor, &row);
        }

        cursor += 8.0;
        cursor = self.build_column_title(scene, &inner, cursor, "Cultivation loops");
        for paragraph in self.guide_paragraphs.clone() {
            scene.text(
                paragraph,
                FontRole::Paragraph,
                palette::PARAGRAPH_TEXT,
                Vec2::new(inner.x, cursor),
                Anchor::TopLeft,
                inner.w,
            );
            cursor += FontRole::Paragraph.line_height() + ROW_SPACING;
        }

        cursor += 8.0;
        cursor = self.build_column_title(scene, &inner, cursor, "Realm milestones");
        for row in self.realm_rows.clone() {
            scene.text(
                row.label,
                FontRole::Button,
                palette::LABEL_TEXT,
                Vec2::new(inner.x, cursor),
                Anchor::TopLeft,
                inner.w,
            );
            cursor += FontRole::Button.line_height() + 6.0;
            scene.text(
                row.value,
                FontRole::Paragraph,
                palette::ROW_VALUE_TEXT,
                Vec2::new(inner.x + 6.0, cursor),
                Anchor::TopLeft,
                inner.w - 12.0,
            );
            cursor += FontRole::Paragraph.line_height() + ROW_SPACING;
        }

        panel.bottom()
    }

    fn build_column_title(&self, scene: &mut Scene, inner: &Rect, cursor: f32, title: &str) -> f32 {
        scene.text(
            title,
            FontRole::Heading,
            palette::HERO_TEXT,
            Vec2::new(inner.x, cursor),
            Anchor::TopLeft,
            inner.w,
        );
        cursor + FontRole::Heading.line_height() + 12.0
    }
}

/// Draw one spotlight card and return the height it used
fn build_soul_card(scene: &mut Scene, rect: Rect, card: &SpotlightCard) -> f32 {
    let padding = 24.0;
    let badge_height = 34.0;
    let title_role = card.title_role();

    let mut required = padding * 2.0;
    required += badge_height + 12.0;
    required += title_role.line_height() + 10.0;
    required += FontRole::Button.line_height() + 12.0;
    if !card.description.is_empty() {
        required += FontRole::Paragraph.line_height();
    }

    let card_rect = Rect::new(rect.x, rect.y, rect.w, required);
    scene.fill_rounded_rect(
        card_rect,
        PANEL_CORNER_RADIUS,
        card.accent.with_alpha(225.0 / 255.0),
    );
    let inner = card_rect.inset(18.0);
    scene.fill_rect(inner, palette::MUTED_OVERLAY);

    let badge_rect = Rect::new(inner.x, inner.y, 110.0, badge_height);
    scene.fill_rounded_rect(
        badge_rect,
        badge_rect.h / 2.0,
        mix(card.accent, Color::BLACK, 0.35).with_alpha(230.0 / 255.0),
    );
    if !card.badge.is_empty() {
        scene.text(
            card.badge.clone(),
            FontRole::Button,
            Color::WHITE,
            Vec2::new(
                badge_rect.x + badge_rect.w / 2.0,
                badge_rect.y + (badge_rect.h - FontRole::Button.line_height()) / 2.0,
            ),
            Anchor::TopCenter,
            badge_rect.w,
        );
    }

    let mut cursor = badge_rect.bottom() + 12.0;
    scene.text(
        card.title.clone(),
        title_role,
        palette::HERO_TEXT,
        Vec2::new(inner.x, cursor),
        Anchor::TopLeft,
        inner.w,
    );
    cursor += title_role.line_height() + 10.0;

    scene.text(
        card.meta.clone(),
        FontRole::Button,
        Color::rgb8(233, 234, 247),
        Vec2::new(inner.x, cursor),
        Anchor::TopLeft,
        inner.w,
    );
    cursor += FontRole::Button.line_height() + 12.0;

    if !card.description.is_empty() {
        scene.text(
            card.description.clone(),
            FontRole::Paragraph,
            palette::HERO_TEXT,
            Vec2::new(inner.x, cursor),
            Anchor::TopLeft,
            inner.w,
        );
    }

    required
}

fn build_label_value_row(scene: &mut Scene, inner: &Rect, cursor: f32, row: &LabelValueRow) -> f32 {
    scene.text(
        row.label.clone(),
        FontRole::Button,
        Color::rgb8(214, 216, 234),
        Vec2::new(inner.x, cursor),
        Anchor::TopLeft,
        inner.w / 2.0,
    );
    scene.text(
        row.value.clone(),
        FontRole::Paragraph,
        palette::ROW_VALUE_TEXT,
        Vec2::new(inner.right(), cursor),
        Anchor::TopRight,
        inner.w / 2.0,
    );
    cursor + FontRole::Button.line_height() + ROW_SPACING
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn loaded_compendium() -> CompendiumHandle {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("souls.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"[
                {"name": "Azure Lynx", "grade": 6, "category": "beast", "affinities": ["wind"], "description": "Prowler."},
                {"name": "Ember Halberd", "grade": 8, "category": "tool", "affinities": ["fire", "metal"], "description": "Blade."},
                {"name": "Mist Serpent", "grade": 8, "category": "beast", "affinities": ["water"], "description": "Coils."},
                {"name": "Stone Tortoise", "grade": 4, "category": "beast", "affinities": ["earth"], "description": "Bulwark."}
            ]"#,
        )
        .unwrap();

        let mut compendium = Compendium::new();
        compendium.load_from_path(&path).unwrap();
        Rc::new(RefCell::new(compendium))
    }

    fn empty_view() -> DashboardView {
        let compendium = Rc::new(RefCell::new(Compendium::new()));
        let mut view = DashboardView::new("codex", compendium);
        // Bypass activate() so the default catalog on disk is not picked up
        view.resolve_colors();
        view.rebuild_sections();
        view
    }

    fn loaded_view() -> DashboardView {
        let mut view = DashboardView::new("codex", loaded_compendium());
        view.activate();
        view
    }

    #[test]
    fn test_no_data_placeholders() {
        let view = empty_view();
        assert!(!view.data_available);
        assert_eq!(view.summary_cards.len(), 3);
        assert_eq!(view.summary_cards[0].label, "Awaiting sync");
        assert_eq!(view.spotlights.len(), 1);
        assert!(view.spotlights[0].soul.is_none());
        assert_eq!(view.affinity_rows[0].label, "Pending sync");
        assert_eq!(view.grade_rows[0].label, "Unknown");
    }

    #[test]
    fn test_loaded_sections() {
        let view = loaded_view();
        assert!(view.data_available);
        assert_eq!(view.summary_cards[0].value, "4");
        assert_eq!(view.summary_cards[1].value, "Grade 8");
        assert_eq!(view.spotlights.len(), SPOTLIGHT_COUNT);
        assert_eq!(view.spotlights[0].title, "Ember Halberd");
        assert_eq!(view.spotlights[0].badge, "Grade 8");
        assert_eq!(view.spotlights[0].meta, "Tool \u{2022} Fire \u{2022} Metal");
        assert_eq!(view.realm_rows.len(), REALM_MILESTONES.len());
        assert!(view.dataset_summary.contains("4 catalogued souls"));
        assert!(view.dataset_path.starts_with("Data source: "));
    }

    #[test]
    fn test_primary_action_rotates_and_wraps() {
        let mut view = loaded_view();

        let first = view.on_primary_action();
        assert!(first.contains("Ember Halberd"));
        let second = view.on_primary_action();
        assert!(second.contains("Mist Serpent"));
        let third = view.on_primary_action();
        assert!(third.contains("Azure Lynx"));
        let wrapped = view.on_primary_action();
        assert_eq!(wrapped, first);
    }

    #[test]
    fn test_primary_action_without_data() {
        let mut view = empty_view();
        assert_eq!(view.on_primary_action(), "Codex overview ready.");

        view.spotlights.clear();
        assert_eq!(view.on_primary_action(), "No martial soul data available.");
    }

    #[test]
    fn test_build_empty_bounds_yields_empty_scene() {
        let mut view = loaded_view();
        let scene = view.build(Rect::new(0.0, 0.0, 0.0, 600.0));
        assert!(scene.is_empty());
        assert!(view.primary_action_rect().is_none());
    }

    #[test]
    fn test_build_places_button_inside_bounds() {
        let mut view = loaded_view();
        let bounds = Rect::new(0.0, 0.0, 1280.0, 720.0);
        let scene = view.build(bounds);
        assert!(!scene.is_empty());
        assert!(scene.content_height() > bounds.h);

        let button = view.primary_action_rect().unwrap();
        assert!(button.x >= bounds.x && button.right() <= bounds.right());
        assert!(button.y >= bounds.y);
    }

    #[test]
    fn test_build_emits_heading_text() {
        let mut view = loaded_view();
        let scene = view.build(Rect::new(0.0, 0.0, 1280.0, 720.0));
        let first_text = scene.text_runs().next().unwrap();
        assert_eq!(first_text.text, "Heaven & Earth Codex");
        assert_eq!(first_text.role, FontRole::Heading);
    }

    #[test]
    fn test_bind_content_resets_rotation() {
        let mut view = loaded_view();
        view.on_primary_action();
        assert_eq!(view.active_spotlight, 1);

        view.bind_content(ViewContent {
            heading: "Custom Codex".to_owned(),
            ..Default::default()
        });
        assert_eq!(view.active_spotlight, 0);
        assert!(view.primary_action_rect().is_none());

        view.activate();
        let scene = view.build(Rect::new(0.0, 0.0, 1280.0, 720.0));
        assert_eq!(scene.text_runs().next().unwrap().text, "Custom Codex");
    }

    #[test]
    fn test_accent_falls_back_on_bad_hex() {
        let compendium = Rc::new(RefCell::new(Compendium::new()));
        let mut view = DashboardView::new("codex", compendium);
        view.bind_content(ViewContent {
            accent_color: "definitely-not-hex".to_owned(),
            ..Default::default()
        });
        view.resolve_colors();
        assert_eq!(view.accent, palette::FALLBACK_ACCENT);

        view.bind_content(ViewContent {
            accent_color: "#336699".to_owned(),
            ..Default::default()
        });
        view.resolve_colors();
        assert_eq!(view.accent, Color::rgb8(0x33, 0x66, 0x99));
    }
}
