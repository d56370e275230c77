fn main() {
    memtarget::term::main();
}
