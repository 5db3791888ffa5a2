// src/model/mod.rs
//! Immutable domain view models produced for the rendering layer.

mod post;

pub use post::{Banner, ContentBlock, ListingPage, NeighborPair, PostDetail, PostSummary};
