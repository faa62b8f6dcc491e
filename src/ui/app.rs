use std::time::{Duration, Instant};

use eframe::egui;

use crate::assets::AssetSize;
use crate::gallery::{Direction, ImageLink};
use crate::runtime::AppContext;
use crate::viewer::{ViewerInput, ViewerKey, ViewerOutcome};

use super::layout::{THUMBNAIL_EDGE, cover_uv, drag_origin_x, fit_within};
use super::page::{Page, UiAction};
use super::textures::TextureCache;

const BACKDROP: egui::Color32 = egui::Color32::from_rgb(12, 12, 12);

pub(super) struct GalleryApp {
    context: AppContext,
    page: Page,
    address: String,
    address_input: String,
    window_title: String,
    textures: TextureCache,
}

impl GalleryApp {
    pub(super) fn new(cc: &eframe::CreationContext<'_>, context: AppContext, address: &str) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        let page = Page::open(&context, address, Instant::now());
        Self {
            context,
            page,
            address: address.to_string(),
            address_input: address.to_string(),
            window_title: String::new(),
            textures: TextureCache::default(),
        }
    }

    fn navigate(&mut self, address: &str) {
        log::info!("navigating to {address}");
        self.page.leave();
        self.page = Page::open(&self.context, address, Instant::now());
        self.set_address(address);
    }

    fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
        self.address_input = address.to_string();
    }

    fn texture(
        &mut self,
        ctx: &egui::Context,
        src: &str,
        size: AssetSize,
    ) -> Option<egui::TextureHandle> {
        self.textures.get(
            ctx,
            self.context.asset_service(),
            &self.context.config().asset_root,
            src,
            size,
        )
    }

    fn handle_shortcuts(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if ctx.wants_keyboard_input() || !matches!(self.page, Page::Image { .. }) {
            return;
        }
        let keys = [
            (egui::Key::ArrowLeft, ViewerKey::ArrowLeft),
            (egui::Key::ArrowRight, ViewerKey::ArrowRight),
            (egui::Key::Escape, ViewerKey::Escape),
        ];
        ctx.input(|input| {
            for (key, viewer_key) in keys {
                if input.key_pressed(key) {
                    actions.push(UiAction::Viewer(viewer_key.input()));
                }
            }
        });
    }

    fn draw_top_bar(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("address_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Home").clicked() {
                    actions.push(UiAction::Navigate("/".to_string()));
                }
                for category in self.context.catalog().categories() {
                    let label = crate::gallery::category_label(category);
                    if ui.selectable_label(false, label).clicked() {
                        let route = crate::gallery::Route::Category {
                            category: category.clone(),
                        };
                        actions.push(UiAction::Navigate(route.address()));
                    }
                }
                ui.separator();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.address_input)
                        .desired_width(f32::INFINITY)
                        .hint_text("/gallery/photos"),
                );
                if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter)) {
                    actions.push(UiAction::Navigate(self.address_input.trim().to_string()));
                }
            });
        });
    }

    fn draw_page(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let frame = egui::Frame::central_panel(&ctx.style()).fill(BACKDROP);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            match &self.page {
                Page::Home { .. } => self.draw_home(ctx, ui, actions),
                Page::Category(_) | Page::Subcategory(_) => self.draw_listing(ctx, ui, actions),
                Page::Image { .. } => self.draw_viewer(ctx, ui, actions),
                Page::NotFound { address, message } => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(80.0);
                        ui.heading("Not found");
                        ui.label(address.as_str());
                        ui.weak(message.as_str());
                        if ui.link("Back to the home page").clicked() {
                            actions.push(UiAction::Navigate("/".to_string()));
                        }
                    });
                }
            }
        });
    }

    fn draw_home(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let Page::Home { view, rotator } = &self.page else {
            return;
        };
        let current = rotator.current().map(|record| record.src.clone());
        let shows_controls = rotator.shows_controls();
        let links = view
            .categories
            .iter()
            .map(|link| (link.label.clone(), link.href.clone()))
            .collect::<Vec<_>>();

        let available = ui.available_rect_before_wrap();
        if let Some(src) = current
            && let Some(texture) = self.texture(ctx, &src, AssetSize::Large)
        {
            let size = fit_within(texture.size_vec2(), available.size());
            let rect = egui::Rect::from_center_size(available.center(), size);
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        if shows_controls {
            let left = egui::Rect::from_center_size(
                egui::pos2(available.left() + 40.0, available.center().y),
                egui::vec2(48.0, 48.0),
            );
            let right = egui::Rect::from_center_size(
                egui::pos2(available.right() - 40.0, available.center().y),
                egui::vec2(48.0, 48.0),
            );
            if ui.put(left, egui::Button::new("‹")).clicked() {
                actions.push(UiAction::Hero(Direction::Previous));
            }
            if ui.put(right, egui::Button::new("›")).clicked() {
                actions.push(UiAction::Hero(Direction::Next));
            }
        }

        let bar = egui::Rect::from_center_size(
            egui::pos2(available.center().x, available.bottom() - 40.0),
            egui::vec2(available.width().min(480.0), 32.0),
        );
        ui.allocate_new_ui(egui::UiBuilder::new().max_rect(bar), |ui| {
            ui.horizontal_centered(|ui| {
                for (label, href) in links {
                    if ui.button(label).clicked() {
                        actions.push(UiAction::Navigate(href));
                    }
                }
            });
        });
    }

    fn draw_listing(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        actions: &mut Vec<UiAction>,
    ) {
        let page = match &self.page {
            Page::Category(listing) => Listing::Category {
                title: listing.title.clone(),
                sections: listing
                    .sections
                    .iter()
                    .map(|section| {
                        (
                            section.title.clone(),
                            section.href.clone(),
                            section.images.clone(),
                        )
                    })
                    .collect(),
            },
            Page::Subcategory(listing) => Listing::Subcategory {
                title: listing.title.clone(),
                works: listing.works.clone(),
                back: (listing.back_label.clone(), listing.back_href.clone()),
                images: listing.images.clone(),
                related: listing
                    .related
                    .iter()
                    .map(|link| (link.title.clone(), link.href.clone()))
                    .collect(),
            },
            _ => return,
        };

        egui::ScrollArea::vertical().show(ui, |ui| match page {
            Listing::Category { title, sections } => {
                ui.heading(title);
                for (title, href, images) in sections {
                    ui.add_space(16.0);
                    if ui.link(egui::RichText::new(title).size(20.0)).clicked() {
                        actions.push(UiAction::Navigate(href));
                    }
                    self.draw_thumbnails(ctx, ui, &images, actions);
                }
            }
            Listing::Subcategory {
                title,
                works,
                back,
                images,
                related,
            } => {
                if ui.link(format!("← {}", back.0)).clicked() {
                    actions.push(UiAction::Navigate(back.1));
                }
                ui.heading(title);
                ui.weak(works);
                ui.add_space(12.0);
                self.draw_thumbnails(ctx, ui, &images, actions);
                if !related.is_empty() {
                    ui.add_space(24.0);
                    ui.label("More in this category");
                    ui.horizontal_wrapped(|ui| {
                        for (title, href) in related {
                            if ui.button(title).clicked() {
                                actions.push(UiAction::Navigate(href));
                            }
                        }
                    });
                }
            }
        });
    }

    fn draw_thumbnails(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        images: &[ImageLink],
        actions: &mut Vec<UiAction>,
    ) {
        ui.horizontal_wrapped(|ui| {
            for link in images {
                let edge = egui::vec2(THUMBNAIL_EDGE, THUMBNAIL_EDGE);
                let response = match self.texture(ctx, &link.record.src, AssetSize::Medium) {
                    Some(texture) => ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::new(
                            texture.id(),
                            edge,
                        ))
                        .uv(cover_uv(texture.size_vec2()))
                        .sense(egui::Sense::click()),
                    ),
                    None => ui.add_sized(edge, egui::Button::new(link.record.alt.as_str())),
                };
                if response.on_hover_text(link.record.alt.as_str()).clicked() {
                    actions.push(UiAction::Navigate(link.href.clone()));
                }
            }
        });
    }

    fn draw_viewer(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let Page::Image { viewer, .. } = &self.page else {
            return;
        };
        let src = viewer.record().src.clone();
        let counter = viewer.counter().to_string();
        let caption = viewer.caption().map(str::to_string);
        let shows_previous = viewer.shows_previous_control();
        let shows_next = viewer.shows_next_control();

        let available = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(available, egui::Sense::click_and_drag());
        if let Some(texture) = self.texture(ctx, &src, AssetSize::Large) {
            let size = fit_within(texture.size_vec2(), available.shrink(48.0).size());
            let rect = egui::Rect::from_center_size(available.center(), size);
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        if let Page::Image { swipe, .. } = &mut self.page {
            let x = response.interact_pointer_pos().map(|pos| pos.x);
            let origin = ctx.input(|input| input.pointer.press_origin());
            if response.drag_started()
                && let Some(start) = drag_origin_x(origin, response.interact_pointer_pos())
            {
                swipe.begin(start);
                if let Some(x) = x {
                    swipe.update(x);
                }
            } else if response.dragged()
                && let Some(x) = x
            {
                swipe.update(x);
            }
            if response.drag_stopped()
                && let Some(input) = swipe.finish()
            {
                actions.push(UiAction::Viewer(input));
            }
        }

        let close = egui::Rect::from_min_size(
            egui::pos2(available.right() - 56.0, available.top() + 12.0),
            egui::vec2(40.0, 40.0),
        );
        if ui.put(close, egui::Button::new("✕")).clicked() {
            actions.push(UiAction::Viewer(ViewerInput::Dismiss));
        }
        if shows_previous {
            let rect = egui::Rect::from_center_size(
                egui::pos2(available.left() + 32.0, available.center().y),
                egui::vec2(40.0, 56.0),
            );
            if ui.put(rect, egui::Button::new("‹")).clicked() {
                actions.push(UiAction::Viewer(ViewerInput::Backward));
            }
        }
        if shows_next {
            let rect = egui::Rect::from_center_size(
                egui::pos2(available.right() - 32.0, available.center().y),
                egui::vec2(40.0, 56.0),
            );
            if ui.put(rect, egui::Button::new("›")).clicked() {
                actions.push(UiAction::Viewer(ViewerInput::Forward));
            }
        }

        let footer = egui::pos2(available.center().x, available.bottom() - 24.0);
        let text = match caption {
            Some(caption) => format!("{caption}    {counter}"),
            None => counter,
        };
        ui.painter().text(
            footer,
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(200),
        );
    }

    fn apply_actions(&mut self, actions: Vec<UiAction>) {
        let now = Instant::now();
        for action in actions {
            match action {
                UiAction::Navigate(address) => self.navigate(&address),
                UiAction::Viewer(input) => {
                    let Page::Image { viewer, .. } = &mut self.page else {
                        continue;
                    };
                    match viewer.handle(input) {
                        ViewerOutcome::Moved(route) => self.set_address(&route.address()),
                        ViewerOutcome::Dismissed(route) => self.navigate(&route.address()),
                        ViewerOutcome::Ignored => {}
                    }
                }
                UiAction::Hero(direction) => {
                    if let Page::Home { rotator, .. } = &mut self.page {
                        match direction {
                            Direction::Previous => rotator.previous(now),
                            Direction::Next => rotator.next(now),
                        }
                    }
                }
            }
        }
    }

    /// Advances the hero and returns how long until it is due again.
    fn tick_hero(&mut self, now: Instant) -> Option<Duration> {
        let Page::Home { rotator, .. } = &mut self.page else {
            return None;
        };
        rotator.tick(now);
        rotator.time_until_next(now)
    }
}

enum Listing {
    Category {
        title: String,
        sections: Vec<(String, String, Vec<ImageLink>)>,
    },
    Subcategory {
        title: String,
        works: String,
        back: (String, String),
        images: Vec<ImageLink>,
        related: Vec<(String, String)>,
    },
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let hero_wait = self.tick_hero(Instant::now());

        let mut actions = Vec::new();
        self.handle_shortcuts(ctx, &mut actions);
        self.draw_top_bar(ctx, &mut actions);
        self.draw_page(ctx, &mut actions);

        let has_pending_actions = !actions.is_empty();
        self.apply_actions(actions);

        let title = format!("{} · {}", self.page.title(), self.address);
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }

        if has_pending_actions {
            ctx.request_repaint();
        } else if let Some(wait) = hero_wait {
            ctx.request_repaint_after(wait);
        }
    }
}
