use std::cell::RefCell;
use std::rc::Rc;
use gloo_render::{request_animation_frame, AnimationFrame};
use yew::{Callback, NodeRef};
use shared::shared_wheel_game::PrizeList;
use shared::wheel_spin::{SpinController, SpinOutcome, SpinRejected, SpinUpdate};
use super::wheel_canvas::draw_wheel;

/// Owns the spin state machine for one wheel page and drives it from animation frames.
pub struct SpinLoop {
    controller: RefCell<SpinController>,
    canvas: NodeRef,
    pending: RefCell<Option<AnimationFrame>>,
    on_finish: Callback<SpinOutcome>,
}

impl SpinLoop {
    pub fn new(canvas: NodeRef, on_finish: Callback<SpinOutcome>) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(SpinController::new()),
            canvas,
            pending: RefCell::new(None),
            on_finish,
        })
    }

    pub fn rotation(&self) -> f64 {
        self.controller.borrow().rotation()
    }

    pub fn is_spinning(&self) -> bool {
        self.controller.borrow().is_spinning()
    }

    /// Draws the idle wheel. Ignored mid-spin so a late prize list cannot repaint the animation.
    pub fn draw_idle(&self, prizes: &PrizeList) {
        if !self.is_spinning() {
            draw_wheel(&self.canvas, prizes, self.rotation());
        }
    }

    pub fn start(self: &Rc<Self>, prizes: Option<&PrizeList>) -> Result<(), SpinRejected> {
        {
            let mut controller = self.controller.borrow_mut();
            let session = controller.request_spin(prizes, &mut rand::thread_rng())?;
            log::debug!("Spinning towards index {} ({})", session.winning_index, session.winning_prize());
        }
        Self::schedule(self);
        Ok(())
    }

    /// Stops the animation without emitting a result. The wheel keeps its last drawn rotation.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
        if self.controller.borrow_mut().cancel() {
            log::debug!("Spin cancelled at rotation {:.3}", self.rotation());
        }
    }

    fn schedule(this: &Rc<Self>) {
        let next = Rc::clone(this);
        let frame = request_animation_frame(move |now| Self::on_frame(&next, now));
        *this.pending.borrow_mut() = Some(frame);
    }

    fn on_frame(this: &Rc<Self>, now: f64) {
        // The winner indexes into the snapshot, so frames draw the snapshot too
        let snapshot = this.controller.borrow().session().map(|session| session.prizes.clone());
        let update = this.controller.borrow_mut().tick(now);

        match (update, snapshot) {
            (SpinUpdate::Animating { rotation }, Some(prizes)) => {
                draw_wheel(&this.canvas, &prizes, rotation);
                Self::schedule(this);
            }
            (SpinUpdate::Finished { rotation, outcome }, Some(prizes)) => {
                draw_wheel(&this.canvas, &prizes, rotation);
                this.pending.borrow_mut().take();
                this.on_finish.emit(outcome);
            }
            _ => {
                this.pending.borrow_mut().take();
            }
        }
    }
}
