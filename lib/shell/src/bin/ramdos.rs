use ramdos_shell::cli::ramdos_main;

fn main() {
    ramdos_main();
}
