// SPDX-License-Identifier: LGPL-3.0-or-later

use lawtscript_core::Context;

pub mod scene;
pub mod stdio;

mod host;
pub use host::*;

pub fn register_funcs<S: HostEnvironment + 'static>(context: &mut Context<S>) {
    scene::register_funcs(context);
    stdio::register_funcs(context);
}

pub mod prolog {
    pub use super::host::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawtscript_core::ParseOptions;

    #[test]
    fn builtins() {
        let mut context = Context::new(RecordingHost::new());
        register_funcs(&mut context);

        for name in ["window", "circle", "print", "printErr"] {
            assert!(context.has_func(name), "{name} is not registered");
        }
    }

    #[test]
    fn scene() -> lawtscript_core::Result {
        let mut context = Context::new(RecordingHost::new());
        register_funcs(&mut context);

        let program = context.load_text(&ParseOptions::default(), "window(800, 600, \"Demo\"); circle(10, 20, 5);");
        context.execute_program(&program)?;

        let calls = context.state.calls().iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(calls, vec!["createWindow(800, 600, \"Demo\")", "createCircle(10, 20, 5)"]);

        Ok(())
    }
}
