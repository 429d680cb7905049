pub mod consts;
pub mod text_utils;
