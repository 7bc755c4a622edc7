use crate::analysis::AnalysisResult;
use crate::resolver::ResolverMethod;
use colored::Colorize;
use miette::Result;

const RULE: &str = "==========================================";

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, result: &AnalysisResult) -> Result<()> {
        println!("{}", RULE);
        println!("{}", "GraphQL Unused Resolver Analysis Report".bold());
        println!("{}", RULE);
        println!();

        println!("Total Schema Fields: {}", result.total_fields);
        println!("Total Resolvers:     {}", result.total_resolvers);
        println!("Unused Resolvers:    {}", result.unused_count());
        println!();

        if result.is_clean() {
            println!("{}", "No unused resolvers found!".green().bold());
            return Ok(());
        }

        println!(
            "{}",
            format!("Unused Resolvers ({}):", result.unused_count())
                .red()
                .bold()
        );
        println!();

        for (i, resolver) in result.unused_resolvers.iter().enumerate() {
            self.print_item(i + 1, resolver);
        }

        println!("{}", RULE);
        println!(
            "{}",
            format!(
                "Recommendation: Review and remove {} unused resolver(s)",
                result.unused_count()
            )
            .yellow()
        );
        println!("{}", RULE);

        Ok(())
    }

    fn print_item(&self, number: usize, resolver: &ResolverMethod) {
        println!("{}. {}", number, resolver.graphql_name().bold());
        println!("   Receiver: {}", resolver.receiver_type());
        println!("   Method:   {}", resolver.method_name());
        println!(
            "   Location: {}",
            format!("{}:{}", resolver.file_path().display(), resolver.line()).cyan()
        );
        println!();
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
