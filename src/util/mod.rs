/*!
Types and routines shared by the compiler and the matcher.

Only [`Span`](search::Span) is part of the public API.
*/

pub mod search;

pub(crate) mod ascii;
pub(crate) mod captures;
pub(crate) mod escape;
pub(crate) mod prefilter;
pub(crate) mod utf8;
