// Example: drive a carousel with inputs and a simulated layout pass per frame.
use carousel::{Bounds, Carousel, CarouselOptions, Input, Layout, Response};

/// Five 160px slides with a 24px gap behind a 480px viewport.
struct Page {
    offset: f32,
}

impl Layout for Page {
    fn viewport(&self) -> Bounds {
        Bounds::new(0.0, 480.0)
    }

    fn slide(&self, index: usize) -> Option<Bounds> {
        (index < 5).then(|| Bounds::new(self.offset + index as f32 * 184.0, 160.0))
    }
}

fn run_frames(c: &mut Carousel, mut response: Response) {
    while response.request_frame {
        let page = Page { offset: c.offset() };
        response = c.layout_settled(&page);
        if let Some(offset) = response.offset {
            println!("  frame: translate3d({offset}px, 0, 0)");
        }
    }
}

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(5)).expect("five slides");
    println!("start index={}", c.index());
    let start = c.initial_response();
    run_frames(&mut c, start);

    for input in [
        Input::Next,
        Input::Next,
        Input::Next,
        Input::Prev,
        Input::GoTo(0),
    ] {
        let r = c.dispatch(input);
        println!("{input:?} -> index={}", c.index());
        run_frames(&mut c, r);
    }

    // A swipe to the left that crosses the threshold.
    c.dispatch(Input::DragStart(300.0));
    for x in [290.0, 270.0, 240.0] {
        c.dispatch(Input::DragMove(x));
        println!("drag x={x} offset={}", c.offset());
    }
    let r = c.dispatch(Input::DragEnd(240.0));
    println!("released -> index={}", c.index());
    run_frames(&mut c, r);

    // Resizes settle 80ms after the last one.
    for now_ms in [0u64, 16, 32, 48] {
        c.dispatch(Input::Resize { now_ms });
    }
    for now_ms in (48..=160).step_by(16) {
        let r = c.update(now_ms);
        if r.request_frame {
            println!("resize settled at t={now_ms}ms");
            run_frames(&mut c, r);
        }
    }
}
