//! 渲染边界层
//!
//! 真正的版面排版（PDF 绘制、分页、字体）属于外部协作方，
//! 这里只产出两种轻量工件：给人看的纯文本稿和给外部渲染器的 JSON

pub mod text;

pub use text::{render_json, render_plain_text, RenderContext};
