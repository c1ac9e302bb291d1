mod common;

mod actions;
mod risks;
mod routing;
