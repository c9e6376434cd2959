use crate::config;
use crate::events::AppEvent;
use crate::gui::circle::{self, Scene};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use orbit::{Phase, Point, SelectionChange};
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub struct AppModel {
    pub scene: Rc<RefCell<Scene>>,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
    pub root: gtk::ApplicationWindow,
    frame_timer: Option<glib::SourceId>,
    last_phase: Phase,
}

#[derive(Debug)]
pub enum AppMsg {
    Tick,
    HoverEnter,
    HoverLeave,
    Click(Point),
    Close,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn start_frame_timer(sender: &ComponentSender<AppModel>, frame: Duration) -> glib::SourceId {
    let sender = sender.clone();
    glib::timeout_add_local(frame, move || {
        sender.input(AppMsg::Tick);
        glib::ControlFlow::Continue
    })
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Scene, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Info Circle"),
            set_resizable: false,
            add_css_class: "infocircle-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Close);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "infocircle-drawing-area",

                add_controller = gtk::EventControllerMotion {
                    connect_enter[sender] => move |_, _, _| {
                        sender.input(AppMsg::HoverEnter);
                    },
                    connect_leave[sender] => move |_| {
                        sender.input(AppMsg::HoverLeave);
                    }
                },

                add_controller = gtk::GestureClick {
                    set_button: gtk::gdk::BUTTON_PRIMARY,
                    connect_released[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Click(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (scene, config_path, rx) = init;

        theme::load_css();
        window::fit_to_canvas(&root, scene.canvas_size());

        let frame = scene.frame_length();
        let scene = Rc::new(RefCell::new(scene));

        let model = AppModel {
            scene: scene.clone(),
            config_path,
            drawing_area: gtk::DrawingArea::default(),
            root: root.clone(),
            frame_timer: None,
            last_phase: Phase::Loading,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let scene_draw = model.scene.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let scene = scene_draw.borrow();
                let offset =
                    window::canvas_offset(width as f64, height as f64, scene.canvas_size());
                cr.translate(offset.x, offset.y);

                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = circle::draw(cr, &scene, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        model.frame_timer = Some(start_frame_timer(&sender, frame));

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.set_visible(true);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tick => {
                let phase = self.scene.borrow_mut().tick();
                if phase != self.last_phase {
                    log::info!("Info circle entered {} phase", phase);
                    self.last_phase = phase;
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::HoverEnter => self.scene.borrow_mut().animator.hover_enter(),
            AppMsg::HoverLeave => self.scene.borrow_mut().animator.hover_leave(),
            AppMsg::Click(point) => {
                let canvas_size = self.scene.borrow().canvas_size();
                let point = window::to_canvas(&self.drawing_area, point, canvas_size);
                let change = self.scene.borrow_mut().click(point);
                if change != SelectionChange::Unchanged {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Close => {
                if self.scene.borrow_mut().animator.close() != SelectionChange::Unchanged {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => self.reload(&sender),
        }
    }
}

impl AppModel {
    fn reload(&mut self, sender: &ComponentSender<Self>) {
        let new_scene = config::load_config(&self.config_path)
            .map_err(|e| e.to_string())
            .and_then(|c| Scene::from_config(&c).map_err(|e| e.to_string()));

        let mut new_scene = match new_scene {
            Ok(s) => s,
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                return;
            }
        };

        new_scene.inherit_pointer(&self.scene.borrow());
        window::fit_to_canvas(&self.root, new_scene.canvas_size());
        let frame = new_scene.frame_length();
        *self.scene.borrow_mut() = new_scene;
        self.last_phase = Phase::Loading;

        if let Some(timer) = self.frame_timer.take() {
            timer.remove();
        }
        self.frame_timer = Some(start_frame_timer(sender, frame));

        self.drawing_area.queue_draw();
        log::info!("Configuration reloaded");
    }
}
