use forte::uci;

fn main() {
    uci::run_uci_loop();
}
