pub mod report_prompt_assets;
