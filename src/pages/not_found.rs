use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Cette page n'existe pas."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Retour à l'accueil"}
            </Link<Route>>

            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #faf5ff;
                    color: #111827;
                }

                .not-found h1 {
                    font-size: 5rem;
                    font-weight: 800;
                    color: #7c3aed;
                    margin: 0;
                }

                .not-found-link {
                    color: #6a0dad;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
