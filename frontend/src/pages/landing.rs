use std::rc::Rc;

use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::content::{is_open_gym, Content, DaySchedule, Plan, Program, SocialLink, TimetableRow};
use crate::reveal::hook::use_scroll_reveal;
use crate::reveal::motion::{stagger, Reveal};

/// DOM ids of every block that animates in on first sight.
pub const REVEAL_SECTIONS: &[&str] = &[
    "motivation",
    "programs",
    "trainer-section",
    "nutrition",
    "pricing",
    "timetable",
    "contact",
    "footer",
];

/// Smooth-scrolls to the element with the given id. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        debug!("no section #{} to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| scroll_to_section(id))
}

fn book(on_book: &Callback<()>) -> Callback<MouseEvent> {
    on_book.reform(|_| ())
}

fn revealed_block(reveal: Reveal, revealed: bool, extra: &'static str) -> (Classes, String) {
    let mut classes = reveal.classes(revealed);
    classes.push(extra);
    (classes, reveal.style())
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<Content>,
    pub on_book: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let reveal = use_scroll_reveal(REVEAL_SECTIONS);
    let content = &props.content;
    let on_book = &props.on_book;

    html! {
        <div class={classes!("landing-page", reveal.is_degraded().then_some("reveal-off"))}>
            <div class="grain-overlay"></div>
            <Hero on_book={on_book.clone()} />
            <Motivation revealed={reveal.is_revealed("motivation")} on_book={on_book.clone()} />
            <Programs revealed={reveal.is_revealed("programs")} programs={content.programs.clone()} />
            <Trainers revealed={reveal.is_revealed("trainer-section")} />
            <Nutrition revealed={reveal.is_revealed("nutrition")} on_book={on_book.clone()} />
            <Pricing
                revealed={reveal.is_revealed("pricing")}
                plans={content.plans.clone()}
                currency={content.currency.clone()}
                on_book={on_book.clone()}
            />
            <Timetable
                revealed={reveal.is_revealed("timetable")}
                days={content.timetable.days.clone()}
                rows={content.timetable.rows.clone()}
                mobile_days={content.timetable.mobile_days.clone()}
            />
            <ContactSection revealed={reveal.is_revealed("contact")} content={content.clone()} />
            <Footer
                revealed={reveal.is_revealed("footer")}
                socials={content.socials.clone()}
                phone={content.contact.phone.clone()}
            />
            <style>{LANDING_CSS}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_book: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <div class="panel-background">
                <img src="/assets/background.jpg" alt="Gym Background" />
                <div class="shade shade-hero"></div>
            </div>
            <div class="hero-content">
                <div class="hero-left">
                    <img src="/assets/dragon-logo.png" alt="GYM NITRO Logo" class="hero-logo logo-glow fade-in-up" />
                    <div class="fade-in-up" style="animation-delay: 0.3s;">
                        <p class="quote-text">{"More than just a place to lift"}</p>
                        <p class="quote-source">{"— A Brotherhood of Iron"}</p>
                    </div>
                    <div class="hero-actions fade-in-up" style="animation-delay: 0.5s;">
                        <button class="btn btn-primary btn-large" onclick={book(&props.on_book)}>
                            {"BOOK FREE TRIAL"}
                        </button>
                        <button class="text-link" onclick={scroll_to("timetable")}>
                            {"View timetable ›"}
                        </button>
                    </div>
                </div>
                <div class="hero-right">
                    <div class="fade-in-up" style="animation-delay: 0.4s;">
                        <span class="headline-xl">{"VICTORY"}</span>
                        <span class="headline-xl accent">{"OR DEATH"}</span>
                    </div>
                    <p class="hero-meta fade-in-up" style="animation-delay: 0.6s;">
                        {"Established 2017 • El Kelâa des Sraghna • 09:00–22:00"}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MotivationProps {
    revealed: bool,
    on_book: Callback<()>,
}

#[function_component(Motivation)]
fn motivation(props: &MotivationProps) -> Html {
    let (class, style) = revealed_block(Reveal::rise(64), props.revealed, "panel-content centered");
    html! {
        <section class="panel">
            <div class="panel-background">
                <img src="/assets/workout.png" alt="Workout" />
                <div class="shade shade-flat"></div>
            </div>
            <div id="motivation" {class} {style}>
                <div>
                    <h2 class="headline-xl">{"NO PAIN"}</h2>
                    <h2 class="headline-xl accent">{"NO GAIN"}</h2>
                </div>
                <p class="lead">{"Show up. Do the work. Repeat."}</p>
                <button class="btn btn-primary btn-large" onclick={book(&props.on_book)}>{"JOIN NOW"}</button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProgramsProps {
    revealed: bool,
    programs: Vec<Program>,
}

#[function_component(Programs)]
fn programs(props: &ProgramsProps) -> Html {
    let revealed = props.revealed;
    let (class, style) = revealed_block(Reveal::fade(), revealed, "programs");
    let (intro_class, intro_style) = revealed_block(Reveal::from_left(64).delayed(100), revealed, "programs-intro");

    html! {
        <section id="programs" {class} {style}>
            <div class={intro_class} style={intro_style}>
                <h2 class="headline-lg">{"MAKE YOUR"}</h2>
                <h2 class="headline-lg accent">{"BODY"}</h2>
                <p class="lead">{"Small-group classes. Personal coaching. Real progress."}</p>
                <div class="button-row">
                    <button class="btn btn-primary" onclick={scroll_to("timetable")}>{"SEE CLASSES"}</button>
                    <button class="text-link" onclick={scroll_to("trainers")}>{"Meet the trainers ›"}</button>
                </div>
            </div>
            <div class="program-cards">
                { for props.programs.iter().enumerate().map(|(index, program)| {
                    let reveal = Reveal::from_right(64).delayed(stagger(200, 100, index));
                    let (class, style) = revealed_block(reveal, revealed, "glass-card program-card");
                    html! {
                        <div key={program.title.clone()} {class} {style}>
                            <div class="icon-badge">{program.icon.glyph()}</div>
                            <div class="program-body">
                                <div class="program-heading">
                                    <h3>{&program.title}</h3>
                                    <span class="class-pill">{&program.duration}</span>
                                </div>
                                <p>{&program.description}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct RevealedProps {
    revealed: bool,
}

#[function_component(Trainers)]
fn trainers(props: &RevealedProps) -> Html {
    let (class, style) = revealed_block(Reveal::fade(), props.revealed, "panel-content");
    let (inner_class, inner_style) = revealed_block(Reveal::from_left(64).delayed(100), props.revealed, "");

    html! {
        <section id="trainers" class="panel">
            <div class="panel-background">
                <img src="/assets/trainer1.png" alt="Trainer" class="top-anchored" />
                <div class="shade shade-left"></div>
            </div>
            <div id="trainer-section" {class} {style}>
                <div class={inner_class} style={inner_style}>
                    <h2 class="headline-lg">{"TRAIN"}</h2>
                    <h2 class="headline-lg accent">{"INSANE"}</h2>
                    <p class="lead">{"Coaching that adapts to you—form, pacing, and recovery."}</p>
                    <button class="btn btn-primary" onclick={scroll_to("contact")}>{"MEET THE TEAM"}</button>
                </div>
                <div class="caption">{"COACH YASSINE / STRENGTH & CONDITIONING"}</div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct NutritionProps {
    revealed: bool,
    on_book: Callback<()>,
}

#[function_component(Nutrition)]
fn nutrition(props: &NutritionProps) -> Html {
    let (class, style) = revealed_block(Reveal::fade(), props.revealed, "panel-content align-end");
    let (inner_class, inner_style) = revealed_block(Reveal::from_right(64).delayed(100), props.revealed, "");

    html! {
        <section class="panel">
            <div class="panel-background">
                <img src="/assets/healthy_meal.jpg" alt="Healthy Meal" />
                <div class="shade shade-right"></div>
            </div>
            <div id="nutrition" {class} {style}>
                <div class={inner_class} style={inner_style}>
                    <h2 class="headline-lg">{"EAT"}</h2>
                    <h2 class="headline-lg accent">{"CLEAN"}</h2>
                    <p class="lead">{"Simple meal plans that support your training without complicating your life."}</p>
                    <button class="btn btn-primary" onclick={book(&props.on_book)}>{"GET THE PLAN"}</button>
                    <div class="tag-row">
                        <span>{"Macro-friendly"}</span>
                        <span>{"Prep-friendly"}</span>
                        <span>{"Flexible swaps"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PricingProps {
    revealed: bool,
    plans: Vec<Plan>,
    currency: String,
    on_book: Callback<()>,
}

#[function_component(Pricing)]
fn pricing(props: &PricingProps) -> Html {
    let revealed = props.revealed;
    let (class, style) = revealed_block(Reveal::fade(), revealed, "listing");
    let (header_class, header_style) = revealed_block(Reveal::rise(32), revealed, "listing-header centered");
    let (cta_class, cta_style) = revealed_block(Reveal::fade().delayed(500), revealed, "centered pricing-cta");

    html! {
        <section id="pricing" {class} {style}>
            <div class={header_class} style={header_style}>
                <h2 class="headline-lg">{"CHOOSE YOUR PLAN"}</h2>
                <p class="muted">{"Train weekly or commit monthly—cancel anytime."}</p>
            </div>
            <div class="plan-grid">
                { for props.plans.iter().enumerate().map(|(index, plan)| {
                    let reveal = Reveal::rise(48).quick().delayed(stagger(200, 100, index));
                    let mut class = reveal.classes(revealed);
                    class.push("glass-card plan-card");
                    if plan.popular {
                        class.push("popular");
                    }
                    html! {
                        <div key={plan.name.clone()} {class} style={reveal.style()}>
                            if plan.popular {
                                <span class="popular-badge">{"Most Popular"}</span>
                            }
                            <h3>{&plan.name}</h3>
                            <p class="muted small">{&plan.description}</p>
                            <div class="price">
                                <span class="price-currency">{&props.currency}</span>
                                <span class="price-amount">{plan.price}</span>
                                <span class="price-period">{format!("/{}", plan.period)}</span>
                            </div>
                            <ul class="feature-list">
                                { for plan.features.iter().map(|feature| html! {
                                    <li><span class="dot"></span>{feature}</li>
                                }) }
                            </ul>
                            <button
                                class={classes!("btn", "btn-block", if plan.popular { "btn-primary" } else { "btn-outline" })}
                                onclick={book(&props.on_book)}
                            >
                                {"START NOW"}
                            </button>
                        </div>
                    }
                }) }
            </div>
            <div class={cta_class} style={cta_style}>
                <button class="btn btn-outline btn-large" onclick={book(&props.on_book)}>{"BOOK FREE TRIAL"}</button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TimetableProps {
    revealed: bool,
    days: Vec<String>,
    rows: Vec<TimetableRow>,
    mobile_days: Vec<DaySchedule>,
}

fn class_pill(class: &Option<String>) -> Html {
    match class {
        Some(name) => html! {
            <span class={classes!("class-pill", is_open_gym(name).then_some("muted-pill"))}>{name}</span>
        },
        None => html! { <span class="empty-slot">{"-"}</span> },
    }
}

#[function_component(Timetable)]
fn timetable(props: &TimetableProps) -> Html {
    let revealed = props.revealed;
    let (class, style) = revealed_block(Reveal::fade(), revealed, "listing listing-alt");
    let (header_class, header_style) = revealed_block(Reveal::rise(32), revealed, "listing-header");

    html! {
        <section id="timetable" {class} {style}>
            <div class={header_class} style={header_style}>
                <h2 class="headline-lg">{"WEEKLY SCHEDULE"}</h2>
                <p class="muted">{"Reserve your spot. Arrive 10 minutes early."}</p>
            </div>

            <div class="timetable-desktop">
                <table class="timetable">
                    <thead>
                        <tr>
                            <th class="timetable-header align-left">{"Time"}</th>
                            { for props.days.iter().map(|day| html! { <th class="timetable-header">{day}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().enumerate().map(|(index, row)| {
                            let reveal = Reveal::fade().quick().delayed(stagger(200, 50, index));
                            html! {
                                <tr key={row.time.clone()} class={reveal.classes(revealed)} style={reveal.style()}>
                                    <td class="timetable-cell time-cell">{&row.time}</td>
                                    { for row.classes.iter().map(|class| html! {
                                        <td class="timetable-cell">{class_pill(class)}</td>
                                    }) }
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>

            <div class="timetable-mobile">
                { for props.mobile_days.iter().enumerate().map(|(index, day)| {
                    let reveal = Reveal::rise(16).quick().delayed(stagger(300, 100, index));
                    let (class, style) = revealed_block(reveal, revealed, "glass-card day-card");
                    html! {
                        <div key={day.day.clone()} {class} {style}>
                            <h3>{&day.day}</h3>
                            <div class="day-slots">
                                { for day.classes.iter().map(|class| html! {
                                    <div class="day-slot">
                                        <span class="slot-time">{&class.time}</span>
                                        <span class="class-pill">{&class.name}</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactProps {
    revealed: bool,
    content: Rc<Content>,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactProps) -> Html {
    let revealed = props.revealed;
    let contact = &props.content.contact;
    let booking = &props.content.booking;
    let (class, style) = revealed_block(Reveal::fade(), revealed, "listing");
    let (form_class, form_style) = revealed_block(Reveal::from_left(32), revealed, "");
    let (info_class, info_style) = revealed_block(Reveal::from_right(32).delayed(200), revealed, "");

    html! {
        <section id="contact" {class} {style}>
            <div class="contact-grid">
                <div class={form_class} style={form_style}>
                    <h2 class="headline-lg">{"BOOK YOUR FIRST SESSION"}</h2>
                    <BookingForm
                        goals={booking.goals.clone()}
                        times={booking.times.clone()}
                        phone_hint={contact.phone.clone()}
                    />
                </div>
                <div class={info_class} style={info_style}>
                    <div class="contact-photo">
                        <img src="/assets/trainer2.png" alt="Gym" />
                    </div>
                    <div class="contact-details">
                        <div class="contact-item">
                            <div class="icon-badge">{"📞"}</div>
                            <div>
                                <h4>{"Phone"}</h4>
                                <p class="strong">{&contact.phone}</p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="icon-badge">{"📍"}</div>
                            <div>
                                <h4>{"Address"}</h4>
                                <p class="strong">{&contact.address}</p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="icon-badge">{"🕘"}</div>
                            <div>
                                <h4>{"Hours"}</h4>
                                <p class="strong">{&contact.hours}</p>
                                <p class="muted small">{&contact.closed}</p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="icon-badge">{"⭐"}</div>
                            <div>
                                <h4>{"Rating"}</h4>
                                <div class="stars">
                                    { for (0..contact.rating).map(|_| html! { <span class="star">{"★"}</span> }) }
                                    <span class="strong">{format!("{}.0", contact.rating)}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    revealed: bool,
    socials: Vec<SocialLink>,
    phone: String,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let (class, style) = revealed_block(Reveal::rise(32), props.revealed, "footer-content");
    html! {
        <footer class="site-footer">
            <div id="footer" {class} {style}>
                <img src="/assets/dragon-logo.png" alt="GYM NITRO Logo" class="footer-logo logo-glow" />
                <h2 class="headline-lg">{"STAY CONNECTED"}</h2>
                <p class="muted">{"Follow the journey. Tag us: "}<span class="accent">{"#GYMNITRO"}</span></p>
                <div class="social-row">
                    { for props.socials.iter().map(|social| html! {
                        <a href={social.href.clone()} class="social-link" aria-label={social.network.label()}>
                            {social.network.label()}
                        </a>
                    }) }
                </div>
                <div class="copyright">{format!("© GYM NITRO • 5-STAR RATED • {}", props.phone)}</div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --navy-dark: #0b1220;
        --navy-light: #131c2e;
        --red-accent: #e11d2e;
        --red-dark: #b3121f;
    }

    body {
        margin: 0;
        background: var(--navy-dark);
        color: #ffffff;
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    }

    .landing-page {
        position: relative;
        min-height: 100vh;
        background: var(--navy-dark);
        overflow-x: hidden;
    }

    .grain-overlay {
        position: fixed;
        inset: 0;
        pointer-events: none;
        opacity: 0.05;
        z-index: 100;
        background-image: radial-gradient(rgba(255, 255, 255, 0.4) 1px, transparent 1px);
        background-size: 3px 3px;
    }

    /* Scroll reveal */
    .reveal {
        opacity: 0;
        transform: translate(var(--reveal-x, 0px), var(--reveal-y, 0px));
        transition: opacity 1s ease-out, transform 1s ease-out;
    }

    .reveal.reveal-quick {
        transition-duration: 0.7s;
    }

    .reveal.revealed {
        opacity: 1;
        transform: none;
    }

    .reveal-off .reveal {
        transition: none;
    }

    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(24px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .fade-in-up {
        opacity: 0;
        animation: fadeInUp 0.8s ease-out forwards;
    }

    @media (prefers-reduced-motion: reduce) {
        .reveal, .fade-in-up {
            transition: none;
            animation: none;
            opacity: 1;
            transform: none;
        }
    }

    /* Type */
    .headline-xl, .headline-lg {
        display: block;
        margin: 0;
        font-family: 'Montserrat', 'Inter', sans-serif;
        font-weight: 900;
        line-height: 0.95;
        letter-spacing: -0.02em;
        text-transform: uppercase;
    }

    .headline-xl {
        font-size: clamp(2.5rem, 8vw, 6rem);
    }

    .headline-lg {
        font-size: clamp(2.25rem, 6vw, 4.5rem);
    }

    .accent {
        color: var(--red-accent);
    }

    .lead {
        max-width: 28rem;
        margin: 1.5rem 0 2rem;
        font-size: 1.125rem;
        color: rgba(255, 255, 255, 0.7);
    }

    .muted {
        color: rgba(255, 255, 255, 0.6);
    }

    .small {
        font-size: 0.875rem;
    }

    .strong {
        margin: 0;
        font-weight: 600;
    }

    .centered {
        text-align: center;
        align-items: center;
    }

    .logo-glow {
        filter: drop-shadow(0 0 18px rgba(225, 29, 46, 0.45));
    }

    /* Buttons */
    .btn {
        display: inline-block;
        padding: 0.9rem 2rem;
        border-radius: 6px;
        border: 2px solid transparent;
        font-weight: 600;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease, color 0.2s ease;
    }

    .btn:hover {
        transform: translateY(-2px);
    }

    .btn-primary {
        background: var(--red-accent);
        color: #ffffff;
        box-shadow: 0 10px 30px rgba(225, 29, 46, 0.35);
    }

    .btn-primary:hover {
        background: var(--red-dark);
    }

    .btn-outline {
        background: transparent;
        border-color: var(--red-accent);
        color: var(--red-accent);
    }

    .btn-outline:hover {
        background: var(--red-accent);
        color: #ffffff;
    }

    .btn-large {
        padding: 1.25rem 2.5rem;
    }

    .btn-block {
        width: 100%;
    }

    .text-link {
        background: none;
        border: none;
        color: rgba(255, 255, 255, 0.7);
        text-decoration: underline;
        text-underline-offset: 4px;
        font-size: 0.875rem;
        cursor: pointer;
    }

    .text-link:hover {
        color: var(--red-accent);
    }

    .button-row, .hero-actions {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        gap: 1rem;
    }

    /* Full-height image panels */
    .hero, .panel {
        position: relative;
        min-height: 100vh;
    }

    .panel-background {
        position: absolute;
        inset: 0;
    }

    .panel-background img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .panel-background img.top-anchored {
        object-position: top;
    }

    .shade {
        position: absolute;
        inset: 0;
    }

    .shade-hero {
        background: linear-gradient(to right, rgba(11, 18, 32, 0.9), rgba(11, 18, 32, 0.7), rgba(11, 18, 32, 0.5));
    }

    .shade-flat {
        background: rgba(11, 18, 32, 0.7);
    }

    .shade-left {
        background: linear-gradient(to right, rgba(11, 18, 32, 0.9), rgba(11, 18, 32, 0.6), transparent);
    }

    .shade-right {
        background: linear-gradient(to left, rgba(11, 18, 32, 0.8), rgba(11, 18, 32, 0.5), transparent);
    }

    .panel-content {
        position: relative;
        z-index: 1;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 0 4rem;
    }

    .panel-content.align-end {
        align-items: flex-end;
        text-align: right;
    }

    .panel-content.align-end .lead {
        margin-left: auto;
    }

    .caption {
        position: absolute;
        bottom: 2rem;
        left: 4rem;
        font-family: monospace;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        color: rgba(255, 255, 255, 0.5);
    }

    .tag-row {
        display: flex;
        justify-content: flex-end;
        gap: 1.5rem;
        margin-top: 2rem;
        font-family: monospace;
        font-size: 0.75rem;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.5);
    }

    /* Hero */
    .hero-content {
        position: relative;
        z-index: 1;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 2rem;
        padding: 5rem 4rem 0;
    }

    .hero-left, .hero-right {
        display: flex;
        flex-direction: column;
        width: 50%;
    }

    .hero-right {
        align-items: flex-end;
        text-align: right;
    }

    .hero-logo {
        height: 12rem;
        width: auto;
        align-self: flex-start;
        margin-bottom: 1.5rem;
    }

    .quote-text {
        margin: 0 0 0.5rem;
        padding-left: 1.5rem;
        border-left: 3px solid var(--red-accent);
        font-size: 1.5rem;
        font-style: italic;
        font-weight: 300;
        color: rgba(255, 255, 255, 0.8);
    }

    .quote-source {
        margin: 0 0 2rem;
        font-family: monospace;
        font-size: 0.75rem;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        color: var(--red-accent);
    }

    .hero-meta {
        max-width: 28rem;
        margin-top: 1.5rem;
        color: rgba(255, 255, 255, 0.6);
    }

    /* Programs */
    .programs {
        min-height: 100vh;
        display: flex;
        align-items: center;
        gap: 3rem;
        padding: 5rem 4rem;
        background: var(--navy-dark);
    }

    .programs-intro {
        width: 45%;
    }

    .program-cards {
        width: 55%;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    .glass-card {
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(255, 255, 255, 0.08);
        backdrop-filter: blur(12px);
        border-radius: 12px;
    }

    .program-card {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
        padding: 1.5rem;
        cursor: pointer;
    }

    .program-card:hover {
        border-color: rgba(225, 29, 46, 0.5);
    }

    .program-body {
        flex: 1;
    }

    .program-heading {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .program-heading h3 {
        margin: 0 0 0.5rem;
    }

    .program-body p {
        margin: 0;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.6);
    }

    .icon-badge {
        padding: 0.75rem;
        border-radius: 8px;
        background: rgba(225, 29, 46, 0.1);
        font-size: 1.25rem;
        line-height: 1;
    }

    .class-pill {
        display: inline-block;
        padding: 0.25rem 0.75rem;
        border-radius: 999px;
        background: rgba(225, 29, 46, 0.15);
        color: var(--red-accent);
        font-family: monospace;
        font-size: 0.7rem;
        letter-spacing: 0.05em;
    }

    .class-pill.muted-pill {
        background: rgba(255, 255, 255, 0.1);
        color: rgba(255, 255, 255, 0.7);
    }

    /* Pricing and timetable */
    .listing {
        padding: 8rem 4rem;
        background: var(--navy-dark);
    }

    .listing-alt {
        background: var(--navy-light);
    }

    .listing-header {
        margin-bottom: 4rem;
    }

    .listing-header.centered {
        text-align: center;
    }

    .plan-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto;
    }

    .plan-card {
        position: relative;
        padding: 2rem;
        border-radius: 16px;
    }

    .plan-card.popular {
        border-top: 2px solid var(--red-accent);
    }

    .plan-card h3 {
        margin: 0 0 0.5rem;
        font-size: 1.25rem;
    }

    .popular-badge {
        position: absolute;
        top: -0.75rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.25rem 1rem;
        border-radius: 999px;
        background: var(--red-accent);
        font-family: monospace;
        font-size: 0.75rem;
        text-transform: uppercase;
        white-space: nowrap;
    }

    .price {
        display: flex;
        align-items: baseline;
        gap: 0.25rem;
        margin: 1.5rem 0;
    }

    .price-currency, .price-period {
        color: rgba(255, 255, 255, 0.5);
    }

    .price-amount {
        font-size: 2.5rem;
        font-weight: 700;
    }

    .feature-list {
        list-style: none;
        padding: 0;
        margin: 0 0 2rem;
    }

    .feature-list li {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 0.75rem;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.7);
    }

    .dot {
        width: 6px;
        height: 6px;
        border-radius: 50%;
        background: var(--red-accent);
    }

    .pricing-cta {
        margin-top: 3rem;
    }

    .timetable {
        width: 100%;
        border-collapse: collapse;
    }

    .timetable-header {
        padding: 1rem;
        font-family: monospace;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.5);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }

    .align-left {
        text-align: left;
    }

    .timetable-cell {
        padding: 1rem;
        text-align: center;
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    }

    .time-cell {
        text-align: left;
        font-family: monospace;
        color: rgba(255, 255, 255, 0.7);
    }

    .empty-slot {
        color: rgba(255, 255, 255, 0.3);
    }

    .timetable-mobile {
        display: none;
        flex-direction: column;
        gap: 1rem;
    }

    .day-card {
        padding: 1rem;
    }

    .day-card h3 {
        margin: 0 0 0.75rem;
    }

    .day-slots {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.5rem;
    }

    .day-slot {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0.5rem;
        border-radius: 8px;
        background: rgba(255, 255, 255, 0.05);
    }

    .slot-time {
        font-family: monospace;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.5);
    }

    /* Contact */
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        max-width: 72rem;
        margin: 0 auto;
    }

    .contact-grid .headline-lg {
        margin-bottom: 2rem;
    }

    .booking-form, .dialog-form {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
    }

    .field-label {
        display: block;
        margin-bottom: 0.5rem;
        font-family: monospace;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.5);
    }

    .field-input {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem;
        border-radius: 6px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: #ffffff;
        font-size: 1rem;
    }

    .field-input:focus {
        outline: none;
        border-color: var(--red-accent);
    }

    .field-input::placeholder {
        color: rgba(255, 255, 255, 0.3);
    }

    .field-input option {
        background: var(--navy-light);
    }

    .field-textarea {
        min-height: 120px;
        resize: vertical;
    }

    .contact-photo {
        border-radius: 16px;
        overflow: hidden;
        margin-bottom: 2rem;
    }

    .contact-photo img {
        width: 100%;
        height: 16rem;
        object-fit: cover;
        object-position: top;
    }

    .contact-details {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .contact-item {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }

    .contact-item h4 {
        margin: 0 0 0.25rem;
        font-family: monospace;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.5);
    }

    .stars {
        display: flex;
        align-items: center;
        gap: 0.25rem;
    }

    .star {
        color: var(--red-accent);
    }

    .stars .strong {
        margin-left: 0.5rem;
    }

    /* Footer */
    .site-footer {
        padding: 4rem;
        background: var(--navy-dark);
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }

    .footer-content {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }

    .footer-logo {
        height: 5rem;
        width: auto;
        margin-bottom: 1.5rem;
    }

    .social-row {
        display: flex;
        justify-content: center;
        gap: 1.5rem;
        margin: 2rem 0 3rem;
    }

    .social-link {
        padding: 0.9rem 1.2rem;
        border-radius: 999px;
        background: rgba(255, 255, 255, 0.05);
        color: #ffffff;
        text-decoration: none;
        font-size: 0.875rem;
        transition: transform 0.2s ease, background 0.2s ease;
    }

    .social-link:hover {
        background: rgba(225, 29, 46, 0.2);
        color: var(--red-accent);
        transform: translateY(-4px);
    }

    .copyright {
        font-family: monospace;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.4);
    }

    /* Booking dialog */
    .dialog-overlay {
        position: fixed;
        inset: 0;
        z-index: 200;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(0, 0, 0, 0.7);
    }

    .dialog-panel {
        position: relative;
        width: 100%;
        max-width: 28rem;
        padding: 1.5rem;
        border-radius: 12px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: var(--navy-light);
    }

    .dialog-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: rgba(255, 255, 255, 0.7);
        font-size: 1rem;
        cursor: pointer;
    }

    .dialog-title {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin: 0;
        font-size: 1.5rem;
    }

    .dialog-logo {
        height: 2.5rem;
        width: auto;
    }

    .dialog-description {
        margin: 0.5rem 0 1.5rem;
        color: rgba(255, 255, 255, 0.6);
    }

    @media (max-width: 1024px) {
        .hero-content, .programs {
            flex-direction: column;
            justify-content: center;
            text-align: center;
            padding: 6rem 1.5rem 3rem;
        }

        .hero-left, .hero-right, .programs-intro, .program-cards {
            width: 100%;
            align-items: center;
            text-align: center;
        }

        .hero-logo {
            height: 8rem;
            align-self: center;
        }

        .panel-content, .listing, .site-footer {
            padding-left: 1.5rem;
            padding-right: 1.5rem;
        }

        .caption {
            left: 1.5rem;
        }

        .listing {
            padding-top: 5rem;
            padding-bottom: 5rem;
        }

        .plan-grid, .contact-grid {
            grid-template-columns: 1fr;
        }

        .timetable-desktop {
            display: none;
        }

        .timetable-mobile {
            display: flex;
        }
    }

    @media (max-width: 640px) {
        .form-row {
            grid-template-columns: 1fr;
        }
    }
"#;
