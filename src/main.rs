use std::env;
use std::process;

fn main() {
    // Passwords live in this process's memory; keep it out of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    process::exit(genpass::cli::run(env::args().collect()));
}
