//! Page state that does not depend on the browser. The Yew layer binds these
//! machines to DOM events; everything here is unit tested natively.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

pub mod catalog;
pub mod contact;
pub mod counter;
pub mod navigation;
pub mod portfolio;
pub mod scroll;
pub mod theme;
