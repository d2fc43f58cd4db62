//! InstantPick entry point
//!
//! Browser build: DOM wiring plus the requestAnimationFrame loop driving
//! the spin core. Native build: a headless demo spin over argv names.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement, HtmlTextAreaElement,
    };

    use instant_pick::audio::AudioManager;
    use instant_pick::entries::{duplicate_info, parse_entries};
    use instant_pick::history::WinnerHistory;
    use instant_pick::render::draw_wheel;
    use instant_pick::spin::{SpinEvent, SpinStart, WheelLayout, tick};
    use instant_pick::{Settings, WheelState};

    /// App instance holding all state
    struct App {
        wheel: WheelState,
        settings: Settings,
        history: WinnerHistory,
        audio: AudioManager,
        entries: Vec<String>,
        /// Winners held from spin start until the completion event
        pending_winners: Vec<String>,
        ctx: CanvasRenderingContext2d,
        canvas_size: f64,
        /// Pending requestAnimationFrame handle, for teardown cancellation
        raf_id: Option<i32>,
    }

    impl App {
        fn new(seed: u64, ctx: CanvasRenderingContext2d, canvas_size: f64) -> Self {
            Self {
                wheel: WheelState::new(seed),
                settings: Settings::load(),
                history: WinnerHistory::load(),
                audio: AudioManager::new(),
                entries: Vec::new(),
                pending_winners: Vec::new(),
                ctx,
                canvas_size,
                raf_id: None,
            }
        }

        /// Repaint from the in-flight layout snapshot if spinning, else
        /// from the live entry list
        fn draw(&self) {
            if let Some(layout) = self.wheel.active_layout() {
                draw_wheel(&self.ctx, layout, self.wheel.rotation, self.canvas_size);
            } else {
                let layout = WheelLayout::new(duplicate_info(&self.entries).unique);
                draw_wheel(&self.ctx, &layout, self.wheel.rotation, self.canvas_size);
            }
        }

        fn handle_events(&mut self, events: Vec<SpinEvent>) {
            for event in events {
                match event {
                    SpinEvent::Tick { volume } => {
                        if self.settings.sound_enabled {
                            self.audio.play_tick(self.settings.scaled_volume(volume));
                        }
                    }
                    SpinEvent::Completed { winners } => {
                        self.history.record(winners.clone(), js_sys::Date::now());
                        self.history.save();
                        render_history(&self.history);
                        if self.settings.sound_enabled {
                            self.audio
                                .play_fanfare(self.settings.scaled_volume(0.5));
                        }
                        if self.settings.confetti_enabled {
                            trigger_confetti();
                        }
                        show_winners(&winners);
                        self.pending_winners.clear();
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("InstantPick starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("wheel-canvas")
            .expect("no wheel canvas")
            .dyn_into()
            .expect("not a canvas");
        let canvas_size = canvas.width() as f64;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed, ctx, canvas_size)));
        log::info!("Wheel initialized with seed: {}", seed);

        setup_entry_input(&document, app.clone());
        setup_spin_button(&document, app.clone());
        setup_settings_controls(&document, app.clone());
        setup_clear_history_button(&document, app.clone());
        setup_teardown(&window, app.clone());

        {
            let a = app.borrow();
            render_history(&a.history);
            // Restore the last draw's winners panel across reloads
            if let Some(last) = a.history.latest() {
                show_winners(&last.winners);
            }
            a.draw();
        }

        log::info!("InstantPick running!");
    }

    fn setup_entry_input(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let Some(textarea) = document.get_element_by_id("entries") else {
            log::error!("No entries textarea found");
            return;
        };
        let textarea: HtmlTextAreaElement = textarea.dyn_into().expect("not a textarea");

        let textarea_clone = textarea.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            a.entries = parse_entries(&textarea_clone.value());
            update_entry_stats(&a.entries, &a.settings);
            a.draw();
        });
        let _ = textarea.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_spin_button(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id("spin-btn") else {
            log::error!("No spin button found");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut a = app.borrow_mut();
            // Browsers gate audio behind a user gesture; the click is one
            a.audio.resume();

            let now = performance_now_secs();
            let count = a.settings.effective_winner_count();
            let entries = a.entries.clone();
            match a.wheel.start_spin(&entries, count, now) {
                Ok(SpinStart::Started { winners }) => {
                    a.pending_winners = winners;
                    drop(a);
                    request_frame(app.clone());
                }
                Ok(SpinStart::Ignored) => {}
                Err(e) => log::warn!("Spin rejected: {e}"),
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Winner count, sound, and confetti preferences; every change is
    /// persisted immediately
    fn setup_settings_controls(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        if let Some(el) = document.get_element_by_id("winner-count") {
            let input: HtmlInputElement = el.dyn_into().expect("not an input");
            input.set_value(&app.borrow().settings.effective_winner_count().to_string());

            let input_clone = input.clone();
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut a = app.borrow_mut();
                a.settings.apply_winner_count_input(&input_clone.value());
                a.settings.save();
                update_entry_stats(&a.entries, &a.settings);
            });
            let _ =
                input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        setup_toggle(
            document,
            "sound-toggle",
            app.clone(),
            |s| s.sound_enabled,
            |s, on| s.sound_enabled = on,
        );
        setup_toggle(
            document,
            "confetti-toggle",
            app,
            |s| s.confetti_enabled,
            |s, on| s.confetti_enabled = on,
        );
    }

    fn setup_toggle(
        document: &web_sys::Document,
        id: &str,
        app: Rc<RefCell<App>>,
        get: impl Fn(&Settings) -> bool,
        set: impl Fn(&mut Settings, bool) + 'static,
    ) {
        let Some(el) = document.get_element_by_id(id) else {
            return;
        };
        let input: HtmlInputElement = el.dyn_into().expect("not a checkbox");
        input.set_checked(get(&app.borrow().settings));

        let input_clone = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            set(&mut a.settings, input_clone.checked());
            a.settings.save();
        });
        let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_clear_history_button(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id("clear-history-btn") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut a = app.borrow_mut();
            a.history.clear();
            a.history.save();
            render_history(&a.history);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Cancel the pending frame callback when the page goes away so no
    /// stale closure fires after teardown (and no completion is signaled)
    fn setup_teardown(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            if let Some(id) = a.raf_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
                log::info!("Pending frame cancelled on teardown");
            }
        });
        let _ = window
            .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let app_for_frame = app.clone();
        let closure = Closure::once(move |time: f64| {
            frame(app_for_frame, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => app.borrow_mut().raf_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
        }
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        let spinning = {
            let mut a = app.borrow_mut();
            a.raf_id = None;

            // The rAF timestamp shares performance.now()'s origin and, unlike
            // Date.now(), cannot step backwards under clock adjustment
            let events = tick(&mut a.wheel, time / 1000.0);
            a.handle_events(events);
            a.draw();

            a.wheel.session.is_some()
        };

        if spinning {
            request_frame(app);
        }
    }

    fn update_entry_stats(entries: &[String], settings: &Settings) {
        let document = web_sys::window().unwrap().document().unwrap();
        let info = duplicate_info(entries);

        if let Some(el) = document.get_element_by_id("entry-count") {
            el.set_text_content(Some(&info.unique.len().to_string()));
        }

        // The selector caps silently; the shell is where the user learns
        if let Some(el) = document.get_element_by_id("count-warning") {
            let count = settings.effective_winner_count();
            if !info.unique.is_empty() && info.unique.len() < count {
                el.set_text_content(Some(&format!(
                    "Only {} entries available; {} winner(s) will be selected.",
                    info.unique.len(),
                    info.unique.len()
                )));
                let _ = el.set_attribute("class", "warning");
            } else {
                el.set_text_content(None);
                let _ = el.set_attribute("class", "hidden");
            }
        }

        if let Some(el) = document.get_element_by_id("duplicate-warning") {
            if info.duplicates.is_empty() {
                el.set_text_content(None);
            } else {
                el.set_text_content(Some(&format!(
                    "Duplicates ignored: {}",
                    info.duplicates.join(", ")
                )));
            }
        }
    }

    fn render_history(history: &WinnerHistory) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(list) = document.get_element_by_id("history-list") else {
            return;
        };
        list.set_text_content(None);
        if history.is_empty() {
            list.set_text_content(Some("No draws yet"));
            return;
        }
        for record in &history.records {
            if let Ok(li) = document.create_element("li") {
                li.set_text_content(Some(&record.summary()));
                let _ = list.append_child(&li);
            }
        }
    }

    /// Restart the CSS burst animation on the confetti overlay
    fn trigger_confetti() {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(el) = document.get_element_by_id("confetti") else {
            return;
        };
        let _ = el.set_attribute("class", "hidden");
        let _ = el.set_attribute("class", "confetti-burst");
    }

    /// Seconds on the monotonic performance clock. Spin sessions are
    /// stamped with this so a wall-clock adjustment mid-spin cannot move
    /// the animation backwards.
    fn performance_now_secs() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now() / 1000.0)
            .unwrap_or(0.0)
    }

    fn show_winners(winners: &[String]) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(list) = document.get_element_by_id("winners") else {
            return;
        };
        list.set_text_content(None);
        for (i, winner) in winners.iter().enumerate() {
            if let Ok(li) = document.create_element("li") {
                li.set_text_content(Some(&format!("{}. {winner}", i + 1)));
                let _ = list.append_child(&li);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Instant, SystemTime, UNIX_EPOCH};

    use instant_pick::spin::{SpinEvent, SpinStart, tick};
    use instant_pick::{Settings, WheelState};

    env_logger::init();

    let mut winner_count = Settings::default().effective_winner_count();
    let mut names: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(n) = arg.strip_prefix("--winners=") {
            winner_count = n.parse().unwrap_or(winner_count).max(1);
        } else {
            names.push(arg);
        }
    }
    if names.is_empty() {
        names = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        log::info!("No names given, using a sample list");
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut wheel = WheelState::new(seed);
    log::info!("Wheel seeded with {seed}");

    let started = match wheel.start_spin(&names, winner_count, 0.0) {
        Ok(SpinStart::Started { winners }) => winners,
        Ok(SpinStart::Ignored) => unreachable!("fresh wheel cannot be spinning"),
        Err(e) => {
            eprintln!("Cannot spin: {e}");
            std::process::exit(1);
        }
    };
    log::debug!("Winners decided up front: {started:?}");

    // Drive the animation against the wall clock at ~60 Hz
    let clock = Instant::now();
    loop {
        let now = clock.elapsed().as_secs_f64();
        let mut done = false;
        for event in tick(&mut wheel, now) {
            match event {
                SpinEvent::Tick { volume } => log::debug!("tick (volume {volume:.2})"),
                SpinEvent::Completed { winners } => {
                    println!("The wheel has spoken:");
                    for (i, winner) in winners.iter().enumerate() {
                        println!("  {}. {winner}", i + 1);
                    }
                    done = true;
                }
            }
        }
        if done {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}
