use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::browser;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = browser::window();
                let listener = window.clone().map(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scrolled = window.scroll_y().map(|y| y > 40.0).unwrap_or(false);
                        is_scrolled.set(scrolled);
                    }) as Box<dyn FnMut()>);
                    scroll_callback
                });

                if let (Some(window), Some(callback)) = (&window, &listener) {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "header-links mobile-menu-open"
    } else {
        "header-links"
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#" class="header-logo">
                    <img src="/assets/logo-without-bg.png" alt="Cliq Logo" />
                    <span>{"Cliq"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={menu_class} onclick={close_menu}>
                    <a href="#services" class="header-link">{"Services"}</a>
                    <a href="#qui-sommes-nous" class="header-link">{"Qui sommes-nous"}</a>
                    <a href="#chez-cliq" class="header-link">{"Chez Cliq"}</a>
                    <a href="#nos-realisations" class="header-link">{"Réalisations"}</a>
                    <a href="#footer" class="header-cta">{"Contact"}</a>
                </nav>
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.92);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 2px 16px rgba(106, 13, 173, 0.08);
                }

                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    text-decoration: none;
                    color: #1f2937;
                    font-size: 1.4rem;
                    font-weight: 700;
                }

                .header-logo img {
                    width: 2.2rem;
                    height: 2.2rem;
                    object-fit: contain;
                }

                .header-links {
                    display: flex;
                    align-items: center;
                    gap: 1.8rem;
                }

                .header-link {
                    color: #374151;
                    text-decoration: none;
                    font-size: 0.95rem;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }

                .header-link:hover {
                    color: #6a0dad;
                }

                .header-cta {
                    background: linear-gradient(135deg, #7c3aed, #6a0dad);
                    color: white;
                    text-decoration: none;
                    font-size: 0.95rem;
                    font-weight: 600;
                    padding: 0.55rem 1.4rem;
                    border-radius: 9999px;
                    transition: opacity 0.2s ease;
                }

                .header-cta:hover {
                    opacity: 0.9;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.4rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1f2937;
                    border-radius: 2px;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .header-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: white;
                        padding: 1.5rem;
                        gap: 1.2rem;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
                    }

                    .header-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
