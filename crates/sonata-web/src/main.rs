fn main() {
    sonata_web::main();
}
