pub mod movie;
pub mod movie_edition;
