//! Option catalogs for each wizard category
//!
//! Every category is a closed enum implementing [`OptionSet`], so the wizard
//! can drive all of them through one generic selector.

use std::fmt;

/// A closed set of choices for one wizard category
pub trait OptionSet: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Prompt shown above the list
    const PROMPT: &'static str;

    /// Display label (also what the filter matches against)
    fn label(&self) -> &'static str;

    /// Confirmation line shown once the option has been picked
    fn remark(&self) -> &'static str;

    /// Look up an option by label, ignoring ASCII case
    fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.label().eq_ignore_ascii_case(label.trim()))
    }
}

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $prompt:literal {
            $($variant:ident => $label:literal, $remark:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl OptionSet for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)+];
            const PROMPT: &'static str = $prompt;

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn remark(&self) -> &'static str {
                match self {
                    $($name::$variant => $remark,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

option_set! {
    /// Source language of the generated project
    SourceLanguage, "Choose a language" {
        JavaScript => "JavaScript",
            "Awesome choice! JavaScript brings flexibility and dynamism to your project. Let's get coding!";
        TypeScript => "TypeScript",
            "Great pick! TypeScript adds type safety and robustness to your application. Time to build!";
    }
}

option_set! {
    PackageManager, "Choose a package manager" {
        Npm => "NPM", "Awesome choice! NPM is the world's most popular package manager.";
        Pnpm => "PNPM", "Great pick! PNPM is a fast, disk space efficient package manager.";
    }
}

option_set! {
    TestFramework, "Choose a test framework" {
        SuperTestWithJest => "SuperTest with Jest", "Awesome choice! SuperTest with Jest covers your routes end to end.";
        MochaWithChaiHttp => "Mocha with Chai HTTP", "Great pick! Mocha with Chai HTTP is a powerful combination.";
    }
}

option_set! {
    LoggerLibrary, "Choose a logger library" {
        Winston => "Winston", "Awesome choice! Winston is the most widely used Node logger.";
        Bunyan => "Bunyan", "Great pick! Bunyan gives you structured JSON logs.";
        Pino => "Pino", "Great pick! Pino is a very low overhead logger.";
    }
}

option_set! {
    Database, "Choose a database" {
        MongoDB => "MongoDB", "Awesome choice! MongoDB is a powerful NoSQL database.";
        PostgreSQL => "PostgreSQL", "Great pick! PostgreSQL is a rock solid relational database.";
        MySQL => "MySQL", "Great pick! MySQL is a proven relational database.";
    }
}

option_set! {
    Orm, "Choose an ORM" {
        Mongoose => "Mongoose", "Awesome choice! Mongoose brings schemas to MongoDB.";
        Prisma => "Prisma", "Great pick! Prisma gives you a type-safe database client.";
        Sequelize => "Sequelize", "Great pick! Sequelize is a mature SQL ORM.";
        TypeOrm => "TypeORM", "Great pick! TypeORM works well with decorators and TypeScript.";
    }
}

option_set! {
    /// How the generated project loads its configuration
    ConfigStyle, "Choose a config style" {
        Dotenv => "dotenv", "Awesome choice! dotenv keeps settings in a simple .env file.";
        NodeConfig => "node-config", "Great pick! node-config layers settings per environment.";
    }
}

option_set! {
    CodingStyle, "Choose a coding style" {
        EslintPrettier => "ESLint + Prettier", "Awesome choice! ESLint with Prettier keeps the codebase tidy.";
        Standard => "StandardJS", "Great pick! StandardJS means no config to argue about.";
    }
}
