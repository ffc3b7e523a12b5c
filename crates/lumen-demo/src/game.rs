use std::time::{Duration, Instant};

use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::render::{FramePresenter, FrameView};
use lumen_trace::{
    step, Framebuffer, PositionPublisher, RemoteChannel, RemotePlayers, RenderContext, SessionId,
    Surface,
};

use crate::controls::{Action, Controls};
use crate::screenshot;
use crate::world;

const TITLE_REFRESH: Duration = Duration::from_millis(500);

/// The running game: one [`RenderContext`] stepped per redraw.
pub struct Game {
    ctx: RenderContext,
    framebuffer: Framebuffer,
    presenter: FramePresenter,
    controls: Controls,

    publisher: PositionPublisher,
    channel: Option<Box<dyn RemoteChannel>>,

    title_updated: Option<Instant>,
}

impl Game {
    pub fn new(session: SessionId, players: RemotePlayers, channel: Option<Box<dyn RemoteChannel>>) -> Self {
        let players = players.ignoring(session.as_str());
        let scene = world::demo_scene();
        for (i, p) in scene.primitives().iter().enumerate() {
            log::debug!("primitive {i}: {}", p.kind());
        }
        let ctx = RenderContext::new(scene, world::spawn_camera()).with_players(players);

        Self {
            ctx,
            framebuffer: Framebuffer::default(),
            presenter: FramePresenter::new(),
            controls: Controls::default(),
            publisher: PositionPublisher::new(session, world::play_area()),
            channel,
            title_updated: None,
        }
    }

    fn exchange_positions(&mut self, now: Instant) {
        let Some(channel) = self.channel.as_mut() else { return };

        for update in channel.poll() {
            self.ctx.players.apply(update, now);
        }
        if let Some(update) = self.publisher.poll(&self.ctx.camera) {
            if let Err(e) = channel.publish(&update) {
                log::warn!("publish failed: {e}");
            }
        }
    }
}

impl App for Game {
    fn on_frame(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl {
        let mut want_screenshot = false;
        for action in self.controls.actions(frame.input_frame) {
            match action {
                Action::Quit => return AppControl::Exit,
                Action::ToggleMoveMode => {
                    self.ctx.camera.mode = self.ctx.camera.mode.toggled();
                    log::info!("move mode: {:?}", self.ctx.camera.mode);
                }
                Action::Screenshot => want_screenshot = true,
            }
        }

        let time = frame.time;
        self.controls.apply(frame.input, &mut self.ctx.camera, time.dt_secs());
        self.exchange_positions(time.now);

        let (w, h) = frame.surface_size();
        if w == 0 || h == 0 {
            return AppControl::Continue;
        }
        self.framebuffer.resize(w, h);

        let result = step(&mut self.ctx, &mut self.framebuffer, time.dt, time.now);

        if want_screenshot {
            if let Err(e) = screenshot::save_png(&self.framebuffer, &screenshot::default_path()) {
                log::error!("screenshot failed: {e:#}");
            }
        }

        if self.title_updated.is_none_or(|t| time.now.duration_since(t) >= TITLE_REFRESH) {
            self.title_updated = Some(time.now);
            frame.window.set_title(&format!(
                "lumen | {:.0} fps | scale {:.2} | {}x{} rays | {} peers",
                result.fps.unwrap_or(0.0),
                result.render_scale,
                result.stats.image_width,
                result.stats.image_height,
                self.ctx.players.len(),
            ));
        }

        let fb = &self.framebuffer;
        let presenter = &mut self.presenter;
        frame.render(|rctx, target| {
            presenter.present(rctx, target, FrameView::new(fb.width(), fb.height(), fb.pixels()));
        })
    }
}
