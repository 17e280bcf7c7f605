//! Touch point extraction from DOM touch events.

use gallery::input::Point;

/// Position of the first active touch (`touches[0]`), for touch-start.
pub fn first_touch(ev: &leptos::ev::TouchEvent) -> Option<Point> {
    #[cfg(feature = "hydrate")]
    {
        ev.touches().get(0).map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Position of the first lifted touch (`changedTouches[0]`), for touch-end.
pub fn first_changed_touch(ev: &leptos::ev::TouchEvent) -> Option<Point> {
    #[cfg(feature = "hydrate")]
    {
        ev.changed_touches()
            .get(0)
            .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
