use formwork_core::cli::Processor;
use formwork_core::env::ProcessingEnv;
use formwork_core::filer::Filer;

pub fn main() -> anyhow::Result<()> {
    formwork_core::cli::run(FormworkDummy)
}

struct FormworkDummy;

impl Processor for FormworkDummy {
    fn name(&self) -> String {
        "dummy".to_string()
    }

    fn process(self, env: &ProcessingEnv) -> anyhow::Result<()> {
        eprintln!("formwork-dummy: options = {:#?}", env.options());

        let filer = Filer::from_env(env);
        eprintln!("formwork-dummy: generated_dir = {}", filer.generated_dir()?);
        Ok(())
    }
}
