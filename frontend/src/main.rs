use std::rc::Rc;

use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod content;
mod reveal {
    pub mod dom;
    pub mod hook;
    pub mod motion;
    pub mod tracker;
}
mod pages {
    pub mod landing;
}
mod components {
    pub mod booking_dialog;
    pub mod booking_form;
    pub mod fields;
}

use components::booking_dialog::BookingDialog;
use content::{Content, NavLink};
use pages::landing::{scroll_to_section, Landing};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: Vec<NavLink>,
    pub on_book: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { links, on_book } = props;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 40.0;

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(true);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let go_to = |target: &str| {
        let menu_open = menu_open.clone();
        let target = target.to_string();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&target);
            menu_open.set(false);
        })
    };

    let book_from_menu = {
        let menu_open = menu_open.clone();
        let on_book = on_book.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_book.emit(());
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
                <div class="nav-brand">
                    <img src="/assets/dragon-logo.png" alt="GYM NITRO Logo" class="nav-logo logo-glow" />
                    <div class="nav-wordmark">{"GYM "}<span class="accent">{"NITRO"}</span></div>
                </div>

                <div class="nav-links">
                    { for links.iter().map(|link| html! {
                        <button key={link.target.clone()} class="nav-link" onclick={go_to(&link.target)}>
                            {&link.label}
                        </button>
                    }) }
                    <button class="btn btn-primary" onclick={on_book.reform(|_: MouseEvent| ())}>
                        {"BOOK FREE TRIAL"}
                    </button>
                </div>

                <button class="burger-menu" aria-label="Open menu" onclick={open_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    <button class="mobile-menu-close" aria-label="Close menu" onclick={close_menu}>{"✕"}</button>
                    <img src="/assets/dragon-logo.png" alt="GYM NITRO Logo" class="mobile-menu-logo logo-glow" />
                    { for links.iter().map(|link| html! {
                        <button key={link.target.clone()} class="mobile-menu-link" onclick={go_to(&link.target)}>
                            {&link.label}
                        </button>
                    }) }
                    <button class="btn btn-primary btn-large" onclick={book_from_menu}>
                        {"BOOK FREE TRIAL"}
                    </button>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    box-sizing: border-box;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 3rem;
                    background: linear-gradient(to bottom, rgba(11, 18, 32, 0.95), transparent);
                    backdrop-filter: blur(4px);
                    transition: background 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(11, 18, 32, 0.95);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .nav-logo {
                    height: 3.5rem;
                    width: auto;
                }

                .nav-wordmark {
                    font-weight: 900;
                    font-size: 1.25rem;
                    letter-spacing: -0.02em;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    font-family: monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.15em;
                    color: rgba(255, 255, 255, 0.7);
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #e11d2e;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    display: block;
                    width: 26px;
                    height: 2px;
                    background: #ffffff;
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: rgba(11, 18, 32, 0.98);
                }

                .mobile-menu-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .mobile-menu-logo {
                    height: 6rem;
                    width: auto;
                    margin-bottom: 1rem;
                }

                .mobile-menu-link {
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    cursor: pointer;
                }

                .mobile-menu-link:hover {
                    color: #e11d2e;
                }

                @media (max-width: 1024px) {
                    .top-nav {
                        padding: 1rem 1.5rem;
                    }

                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }
                }

                @media (max-width: 640px) {
                    .nav-wordmark {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<Content>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let booking_open = use_state(|| false);

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(true))
    };

    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(false))
    };

    html! {
        <>
            <Nav links={props.content.nav_links.clone()} on_book={open_booking.clone()} />
            <Landing content={props.content.clone()} on_book={open_booking} />
            <BookingDialog
                open={*booking_open}
                days={props.content.booking.days.clone()}
                phone_hint={props.content.contact.phone.clone()}
                on_close={close_booking}
            />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting GYM NITRO landing page");
    let content = Rc::new(Content::load());
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
