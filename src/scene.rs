//! The fixed scene drawn by the gamma tool: a grey background with a
//! colored rectangle over the middle half of the viewport.
//!
//! The rectangle is a scissored clear, so the same code works on core,
//! compatibility and ES contexts.

pub const CLEAR_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
pub const RECT_COLOR: [f32; 3] = [0.8, 0.2, 0.4];

/// A pixel rectangle in window coordinates, origin at the bottom left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// The central half of a `width` x `height` viewport.
#[must_use]
pub fn centered_rect(width: u32, height: u32) -> Rect {
    let x = width / 4;
    let y = height / 4;
    Rect {
        x: x as i32,
        y: y as i32,
        width: (width - 2 * x) as i32,
        height: (height - 2 * y) as i32,
    }
}

pub fn set_viewport(width: u32, height: u32) {
    unsafe {
        gl::Viewport(0, 0, width.max(1) as i32, height.max(1) as i32);
    }
}

/// Draw one frame. The caller swaps buffers.
pub fn draw(width: u32, height: u32) {
    let rect = centered_rect(width, height);
    let [r, g, b] = CLEAR_COLOR;
    let [rr, rg, rb] = RECT_COLOR;

    unsafe {
        gl::Disable(gl::SCISSOR_TEST);
        gl::ClearColor(r, g, b, 0.0);
        gl::Clear(gl::COLOR_BUFFER_BIT);

        gl::Enable(gl::SCISSOR_TEST);
        gl::Scissor(rect.x, rect.y, rect.width, rect.height);
        gl::ClearColor(rr, rg, rb, 1.0);
        gl::Clear(gl::COLOR_BUFFER_BIT);
        gl::Disable(gl::SCISSOR_TEST);
    }
}
