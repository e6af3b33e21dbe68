// SPDX-License-Identifier: LGPL-3.0-or-later

use lawtscript_core::prolog::*;

use crate::HostEnvironment;

pub fn register_funcs<S: HostEnvironment + 'static>(context: &mut Context<S>) {
    context.register_func("window", self::window);
    context.register_func("circle", self::circle);
}

/// `window(width, height, title)`
pub fn window<S: HostEnvironment>(context: &mut Context<S>, args: &[Value]) -> ExecuteResult {
    let width = args.integer(0)?;
    let height = args.integer(1)?;
    let title = args.string(2)?;

    log::trace!("Creating {width}x{height} window '{title}'");
    context.state.create_window(width, height, title);
    Ok(())
}

/// `circle(x, y, radius)`
pub fn circle<S: HostEnvironment>(context: &mut Context<S>, args: &[Value]) -> ExecuteResult {
    let x = args.float(0)?;
    let y = args.float(1)?;
    let radius = args.float(2)?;

    log::trace!("Creating circle at ({x}, {y}) with radius {radius}");
    context.state.create_circle(x, y, radius);
    Ok(())
}
