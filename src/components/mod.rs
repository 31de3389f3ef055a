pub mod style;

mod bubble;
pub use bubble::*;

mod button;
pub use button::*;

mod searchbar;
pub use searchbar::*;

mod ingredient_card;
pub use ingredient_card::*;

mod ingredient_list;
pub use ingredient_list::*;

mod cocktail_presentation;
pub use cocktail_presentation::*;

mod nav;
pub use nav::*;

pub mod page;
pub use page::{
    Page, PageContent, PageFooter, PageHeader, PageSession, SessionPadding, SessionStyle,
};
