use hub_locator::solver::search;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    search::run()
}
