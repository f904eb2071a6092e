use leptos::prelude::{Callable, Callback};

/// Внешний маршрутизатор: выполнить переход по маршруту, результат не ждём.
pub trait Navigator {
    fn navigate_to(&self, route: &str);
}

impl Navigator for Callback<String> {
    fn navigate_to(&self, route: &str) {
        self.run(route.to_string());
    }
}
