//! Client testimonials carousel.
//!
//! The carousel state lives in a [`RotationController`]; this component only
//! drives it (arrows, dots, the autoplay interval) and animates whatever slide
//! the controller reports. The slide that just left stays mounted for one
//! [`SLIDE_DURATION`] so its exit can play.

use curv_motion::variants::SLIDE_DURATION;
use curv_motion::{Phase, RotationController, Slide, Stage, TimerSlot, Transition};
use leptos::prelude::*;

use super::site_config;
use crate::content::{TESTIMONIALS, Testimonial};
use crate::hooks::{reveal_class, use_reveal};

#[component]
pub fn Testimonials() -> impl IntoView {
    let config = site_config();
    let controller = match RotationController::new(TESTIMONIALS.to_vec()) {
        Ok(controller) => controller,
        Err(err) => {
            tracing::error!(%err, "testimonial carousel not rendered");
            return ().into_any();
        }
    };
    let count = controller.count();
    let autoplay = config.carousel;

    let carousel = RwSignal::new(controller);
    let stage = RwSignal::new(Stage::new());
    let timer = StoredValue::new(TimerSlot::<IntervalHandle>::new());

    let section = NodeRef::<leptos::html::Section>::new();
    let shown = use_reveal(section, config.reveal.section);

    let settle = move |transition: Transition| {
        let Some(leaving) = stage.try_update(|stage| stage.settle(transition)).flatten() else {
            return;
        };
        set_timeout(
            move || {
                let _ = stage.try_update(|stage| stage.retire(leaving));
            },
            SLIDE_DURATION,
        );
    };

    let disarm = move || {
        if let Some(handle) = timer.try_update_value(TimerSlot::disarm).flatten() {
            handle.clear();
        }
    };

    let arm = move || {
        let tick = move || {
            if let Some(transition) = carousel.try_update(RotationController::advance) {
                settle(transition);
            }
        };
        match set_interval_with_handle(tick, autoplay.interval()) {
            Ok(handle) => {
                let previous = timer.try_update_value(|slot| slot.arm(handle)).flatten();
                if let Some(previous) = previous {
                    previous.clear();
                }
            }
            Err(err) => tracing::warn!(?err, "autoplay interval could not be scheduled"),
        }
    };

    let manual = move |transition: Transition| {
        settle(transition);
        if autoplay.manual_navigation.restarts_timer() {
            arm();
        }
    };
    let step = move |op: fn(&mut RotationController<Testimonial>) -> Transition| {
        if let Some(transition) = carousel.try_update(op) {
            manual(transition);
        }
    };
    let previous = move |_| step(RotationController::retreat);
    let next = move |_| step(RotationController::advance);
    let jump = move |index: usize| match carousel.try_update(|c| c.jump_to(index)) {
        Some(Ok(transition)) => manual(transition),
        Some(Err(err)) => tracing::warn!(%err, "ignoring testimonial jump"),
        None => {}
    };

    arm();
    on_cleanup(disarm);

    let slides = move || {
        let current = carousel.with(RotationController::slide);
        stage.with(|stage| stage.slides(current))
    };

    view! {
        <section id="testimonials" class="testimonials section-snap" node_ref=section>
            <div class=reveal_class("testimonials-quote-mark", shown)>"“"</div>

            <div class="container">
                <div class=reveal_class("section-head", shown)>
                    <span class="eyebrow accent">"Testimonials"</span>
                    <h2 class="section-title">
                        "What Our " <span class="gradient-gold">"Clients"</span> " Say"
                    </h2>
                </div>

                <div class="testimonial-stage">
                    <For
                        each=slides
                        key=|(slide, phase)| (slide.index, *phase)
                        children=move |(slide, phase)| {
                            let testimonial =
                                carousel.with_untracked(|c| c.get(slide.index).copied());
                            testimonial.map(|testimonial| {
                                view! {
                                    <TestimonialCard
                                        testimonial=testimonial
                                        slide=slide
                                        phase=phase
                                    />
                                }
                            })
                        }
                    />
                </div>

                <div class="testimonial-arrows">
                    <button
                        class="round-button"
                        aria-label="Previous testimonial"
                        on:click=previous
                    >
                        "‹"
                    </button>
                    <button class="round-button" aria-label="Next testimonial" on:click=next>
                        "›"
                    </button>
                </div>

                <div class="testimonial-dots">
                    {(0..count)
                        .map(|index| {
                            let class = move || {
                                if carousel.with(RotationController::index) == index {
                                    "dot active"
                                } else {
                                    "dot"
                                }
                            };
                            view! {
                                <button
                                    class=class
                                    aria-label=format!("Show testimonial {}", index + 1)
                                    on:click=move |_| jump(index)
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn TestimonialCard(testimonial: Testimonial, slide: Slide, phase: Phase) -> impl IntoView {
    let class = match phase {
        Phase::Enter => "testimonial-card slide-in",
        Phase::Exit => "testimonial-card slide-out",
    };
    let style = phase.style(slide);

    view! {
        <article class=class style=style>
            <span class="testimonial-quote-icon">"“"</span>
            <p class="testimonial-content">{format!("\"{}\"", testimonial.content)}</p>

            <div class="testimonial-author">
                <div class="testimonial-avatar">{testimonial.initial().to_string()}</div>
                <div>
                    <p class="testimonial-name">{testimonial.name}</p>
                    <p class="testimonial-role">{testimonial.role}</p>
                </div>
            </div>

            <div class="testimonial-stars">
                {(0..u32::from(testimonial.rating))
                    .map(|i| {
                        let delay = format!("animation-delay: {}ms", 300 + i * 100);
                        view! { <span class="star" style=delay>"★"</span> }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="testimonial-shadow"></div>
        </article>
    }
}
