use carousel::{Bounds, Input, Layout};
use carousel_adapter::{RootParts, attach_all};

struct Strip {
    offset: f32,
    count: usize,
}

impl Layout for Strip {
    fn viewport(&self) -> Bounds {
        Bounds::new(0.0, 320.0)
    }

    fn slide(&self, index: usize) -> Option<Bounds> {
        (index < self.count).then(|| Bounds::new(self.offset + index as f32 * 120.0, 100.0))
    }
}

fn root(name: &'static str, slides: usize, viewport: bool) -> RootParts<&'static str> {
    RootParts {
        root: name,
        track: Some("track"),
        viewport: viewport.then_some("viewport"),
        slides: vec!["slide"; slides],
        prev_button: Some("prev"),
        next_button: None,
        indicator_container: Some("dots"),
    }
}

fn main() {
    // Example: an adapter discovers three roots; only the complete one is mounted.
    let roots = [
        root("brands", 4, true),
        root("empty", 0, true),
        root("broken", 3, false),
    ];
    let mut mounted = attach_all(roots, |options| options);
    println!("mounted {} of 3 roots", mounted.len());

    for m in &mut mounted {
        println!("{}: wiring={:?}", m.root, m.wiring());
        let mut pending = m.controller.start();
        pending.merge(m.controller.on_input(Input::Prev));

        // The adapter's frame loop: one callback per request.
        while pending.request_frame {
            let strip = Strip {
                offset: m.controller.carousel().offset(),
                count: m.slides.len(),
            };
            pending = m.controller.on_frame(&strip);
        }
        m.controller.carousel().indicators().for_each(|i, active, label| {
            println!("  [{}] {label}{}", i, if active { " (active)" } else { "" });
        });
        println!("  offset={}", m.controller.carousel().offset());
    }
}
