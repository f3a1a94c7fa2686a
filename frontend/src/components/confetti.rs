use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use web_sys::{window, CustomEvent, CustomEventInit, Event};
use yew::prelude::*;

pub const CELEBRATE_EVENT: &str = "wheelCelebrate";

const PARTICLE_COUNT: usize = 200;
const COLORS: [&str; 3] = ["#D9230F", "#F2C94C", "#FFFFFF"];
const BURST_MS: u32 = 4000;

const CONFETTI_CSS: &str = r#"
@keyframes confetti-fall {
    0% {
        transform: translate3d(0, 0, 0) rotate(0deg);
        opacity: 1;
    }
    100% {
        transform: translate3d(var(--drift), 70vh, 0) rotate(720deg);
        opacity: 0;
    }
}

.confetti-piece {
    position: absolute;
    top: 60%;
    animation-name: confetti-fall;
    animation-timing-function: cubic-bezier(0.2, 0.6, 0.4, 1);
    animation-fill-mode: forwards;
}
"#;

/// Fires the celebration burst on any mounted [`Confetti`].
pub fn celebrate() {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        if let Ok(event) = CustomEvent::new_with_event_init_dict(CELEBRATE_EVENT, &event_init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub left: f64,
    pub drift: f64,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub size: f64,
    pub color: &'static str,
}

impl ConfettiPiece {
    fn style(&self) -> String {
        format!(
            "left: {:.1}%; --drift: {:.0}px; width: {:.0}px; height: {:.0}px; background: {}; \
             animation-delay: {:.0}ms; animation-duration: {:.0}ms;",
            self.left, self.drift, self.size, self.size * 0.4, self.color, self.delay_ms, self.duration_ms
        )
    }
}

/// One burst launched from the horizontal center and fanned out sideways.
pub fn confetti_pieces<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            left: 50.0 + rng.gen_range(-25.0..25.0),
            drift: rng.gen_range(-350.0..350.0),
            delay_ms: rng.gen_range(0.0..300.0),
            duration_ms: rng.gen_range(1800.0..3200.0),
            size: rng.gen_range(6.0..12.0),
            color: COLORS[rng.gen_range(0..COLORS.len())],
        })
        .collect()
}

#[function_component(Confetti)]
pub fn confetti() -> Html {
    let pieces = use_state(Vec::<ConfettiPiece>::new);
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    {
        let pieces = pieces.clone();
        let clear_timer = clear_timer.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                let clear_timer = clear_timer.clone();
                EventListener::new(&window, CELEBRATE_EVENT, move |_event: &Event| {
                    let mut rng = SmallRng::from_entropy();
                    pieces.set(confetti_pieces(&mut rng, PARTICLE_COUNT));

                    let pieces = pieces.clone();
                    *clear_timer.borrow_mut() = Some(Timeout::new(BURST_MS, move || pieces.set(Vec::new())));
                })
            });

            move || {
                drop(listener);
                clear_timer.borrow_mut().take();
            }
        });
    }

    if pieces.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 z-50 overflow-hidden pointer-events-none">
            <style>{CONFETTI_CSS}</style>
            { for pieces.iter().map(|piece| html! {
                <div class="confetti-piece" style={piece.style()}></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_confetti_pieces_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let pieces = confetti_pieces(&mut rng, PARTICLE_COUNT);
        assert_eq!(pieces.len(), PARTICLE_COUNT);
        for piece in &pieces {
            assert!((25.0..75.0).contains(&piece.left));
            assert!(COLORS.contains(&piece.color));
            assert!(piece.delay_ms < 300.0);
        }
    }
}
