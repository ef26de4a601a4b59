use field_measuring_tool::error::Result;
use field_measuring_tool::field::FieldProfile;

fn main() -> Result<()> {
    field_measuring_tool::init_logging();
    field_measuring_tool::run(FieldProfile::ROVER_RUCKUS)
}
