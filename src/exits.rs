//! Exit handling: signal handlers and terminal restoration.

use crate::terminal::screen_active;

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Leave the alternate screen and show the cursor, if the form was up.
fn restore_screen() {
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h\x1b[?1049l";
    if !screen_active() {
        return;
    }
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// Registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    restore_screen();
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT - give the terminal back, then re-raise for the default action
/// (main marks the process non-dumpable, so no core file is written)
extern "C" fn crash_handler(sig: libc::c_int) {
    reset_terminal_termios();
    restore_screen();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    reset_terminal_termios();
}
