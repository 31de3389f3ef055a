use std::env;

use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, Context, KeyBinding, Menu, TitlebarOptions, Window,
    WindowBounds, WindowOptions, actions, div, point, prelude::*, px, size,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mixologist::{
    components::{
        CocktailPresentation, IngredientList, Page, PageContent, PageFooter, PageSession,
    },
    models::Recipe,
    theme::{Theme, ThemeExt, ThemeTextSizeKind},
};

const THEME_ENV: &str = "MIXOLOGIST_THEME";

struct Mixologist {
    recipe: Recipe,
    with_nav: bool,
}

actions!(window, [TabNext, TabPrev]);

impl Mixologist {
    fn new(recipe: Recipe, with_nav: bool, cx: &mut Context<Self>) -> Self {
        cx.observe_global::<Theme>(|_, cx| cx.notify()).detach();

        Self { recipe, with_nav }
    }
}

impl Render for Mixologist {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        mixologist::init_for_window(window, cx);

        let text_size = ThemeTextSizeKind::Body.resolve(cx);
        let font_family = cx.get_theme().layout.text.default_font.family.first().cloned();

        let cocktail = self.recipe.cocktail.clone();
        let ingredients = self.recipe.ingredients.clone();

        div()
            .id("mixologist")
            .size_full()
            .overflow_y_scroll()
            .when_some(font_family, |this, family| this.font_family(family))
            .text_size(text_size)
            .child(
                Page::new("page")
                    .title("Welcome to Mixologist")
                    .with_nav(self.with_nav)
                    .on_search(|query, _window, _cx| tracing::info!(query, "searching cocktails"))
                    .child(
                        PageContent::new()
                            .child(PageSession::new().child(CocktailPresentation::new(
                                "hero:default",
                                cocktail.clone(),
                            )))
                            .child(
                                PageSession::new()
                                    .inverted(true)
                                    .child(CocktailPresentation::new("hero:inverted", cocktail)),
                            )
                            .child(
                                PageSession::new()
                                    .inverted(true)
                                    .inner_padding("xl")
                                    .child(IngredientList::new(ingredients)),
                            ),
                    )
                    .footer(PageFooter::new().child("A footer")),
            )
    }
}

/// Reads a theme file named by the environment, if any.
fn custom_theme() -> Option<Theme> {
    let path = env::var_os(THEME_ENV)?;

    match Theme::from_file(&path) {
        Ok(theme) => {
            tracing::info!(theme = %theme.name, "loaded custom theme");
            Some(theme)
        }
        Err(error) => {
            tracing::warn!(%error, "falling back to the built-in themes");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let recipe = Recipe::from_json(include_str!("caipirinha.json"))
        .context("demo recipe fixture is invalid")?;
    let custom_theme = custom_theme();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .run(move |cx: &mut App| {
            mixologist::init(cx);

            // The nav cycles built-in themes, so it would replace a custom one.
            let with_nav = match custom_theme {
                Some(theme) => {
                    cx.set_theme(theme);
                    false
                }
                None => true,
            };

            cx.set_menus(vec![Menu {
                name: "Mixologist".into(),
                items: vec![],
            }]);

            let bounds = Bounds::centered(None, size(px(1200.), px(900.)), cx);

            let opened = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| cx.new(|cx| Mixologist::new(recipe, with_nav, cx)),
            );

            if let Err(error) = opened {
                tracing::error!(%error, "failed to open the main window");
                cx.quit();
                return;
            }

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });

    Ok(())
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([KeyBinding::new("tab", TabNext, None)]);
    cx.bind_keys([KeyBinding::new("shift-tab", TabPrev, None)]);
}
