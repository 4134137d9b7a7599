//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, PageArgs};
use crate::client::{BggClient, RequestBuilder};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::mapper::FromXml;
use crate::pagination::Paginated;
use crate::request::{
    CollectionOptions, GuildOptions, PlaysOptions, SearchOptions, ThingOptions, ThreadOptions,
    UserOptions,
};
use crate::response::Response;
use crate::types::{Inclusion, MemberSort};
use serde::Serialize;
use std::process::ExitCode;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

/// `Some(Include)` for a set flag, otherwise leave the parameter out
fn include(flag: bool) -> Option<Inclusion> {
    flag.then_some(Inclusion::Include)
}

/// `Some(true)` for a set filter flag, otherwise no filter
fn filter(flag: bool) -> Option<bool> {
    flag.then_some(true)
}

fn with_pages<T>(builder: RequestBuilder<T>, pages: PageArgs) -> Result<RequestBuilder<T>>
where
    T: FromXml + Paginated + Send + 'static,
{
    match (pages.all_pages, pages.pages) {
        (true, _) => builder.paginate(),
        (false, Some(n)) => builder.paginate_pages(n),
        (false, None) => Ok(builder),
    }
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    fn load_config(&self) -> Result<ClientConfig> {
        match &self.cli.config {
            Some(path) => ClientConfig::from_file(path),
            None => Ok(ClientConfig::default()),
        }
    }

    /// Run the CLI command.
    ///
    /// An error response is printed to stderr as JSON and yields a failing
    /// exit code; `Err` is reserved for failures before a call resolved.
    pub async fn run(&self) -> Result<ExitCode> {
        let client = BggClient::new(self.load_config()?)?;
        debug!(command = ?self.cli.command, "Running command");

        match &self.cli.command {
            Commands::Thing {
                ids,
                types,
                stats,
                versions,
                videos,
                marketplace,
                comments,
                rating_comments,
                page,
                page_size,
                pages,
            } => {
                let options = ThingOptions {
                    types: types.clone(),
                    stats: *stats,
                    versions: *versions,
                    videos: *videos,
                    marketplace: *marketplace,
                    comments: *comments,
                    rating_comments: *rating_comments,
                    page: *page,
                    page_size: *page_size,
                };
                let builder = client.things(ids, options)?;
                self.emit(with_pages(builder, *pages)?).await
            }
            Commands::Collection {
                username,
                subtype,
                own,
                wishlist,
                stats,
                brief,
            } => {
                let options = CollectionOptions {
                    subtype: subtype.clone(),
                    own: filter(*own),
                    wishlist: filter(*wishlist),
                    stats: *stats,
                    brief: *brief,
                    ..Default::default()
                };
                self.emit(client.collection(username, options)?).await
            }
            Commands::User {
                name,
                buddies,
                guilds,
                top,
                hot,
                domain,
                page,
                pages,
            } => {
                let options = UserOptions {
                    buddies: include(*buddies),
                    guilds: include(*guilds),
                    top: include(*top),
                    hot: include(*hot),
                    domain: domain.clone(),
                    page: *page,
                };
                self.emit(with_pages(client.user(name, options)?, *pages)?)
                    .await
            }
            Commands::Forum { id, page, pages } => {
                self.emit(with_pages(client.forum(*id, *page)?, *pages)?)
                    .await
            }
            Commands::ForumList { id, list_type } => {
                self.emit(client.forum_list(*id, list_type.clone())?).await
            }
            Commands::Thread {
                id,
                min_article_id,
                count,
            } => {
                let options = ThreadOptions {
                    min_article_id: *min_article_id,
                    count: *count,
                    ..Default::default()
                };
                self.emit(client.thread(*id, options)?).await
            }
            Commands::Geeklist { id, comments } => {
                self.emit(client.geeklist(*id, include(*comments))?).await
            }
            Commands::Guild {
                id,
                members,
                sort_by_date,
                page,
                pages,
            } => {
                let options = GuildOptions {
                    members: include(*members),
                    sort: sort_by_date.then_some(MemberSort::Date),
                    page: *page,
                };
                self.emit(with_pages(client.guild(*id, options)?, *pages)?)
                    .await
            }
            Commands::Hot { list_type } => self.emit(client.hot(list_type.clone())?).await,
            Commands::Search {
                query,
                types,
                exact,
            } => {
                let options = SearchOptions {
                    types: types.clone(),
                    exact: include(*exact),
                };
                self.emit(client.search(query, options)?).await
            }
            Commands::SitemapIndex => self.emit(client.sitemap_index()?).await,
            Commands::Sitemap { location } => self.emit(client.sitemap(location)?).await,
            Commands::SitemapDiffuse { types } => self.output(client.diffuse_sitemap(types).await),
            Commands::Plays {
                username,
                id,
                thing_type,
                subtype,
                min_date,
                max_date,
                page,
                pages,
            } => {
                let options = PlaysOptions {
                    id: *id,
                    thing_type: thing_type.clone(),
                    subtype: subtype.clone(),
                    min_date: *min_date,
                    max_date: *max_date,
                    page: *page,
                };
                self.emit(with_pages(client.plays(username, options)?, *pages)?)
                    .await
            }
            Commands::Family { ids, types } => self.emit(client.family(ids, types)?).await,
        }
    }

    /// Submit a call and print its outcome
    async fn emit<T>(&self, builder: RequestBuilder<T>) -> Result<ExitCode>
    where
        T: FromXml + Serialize + Send + 'static,
    {
        let response = builder.call().await?;
        self.output(response)
    }

    fn output<T: Serialize>(&self, response: Response<T>) -> Result<ExitCode> {
        match response {
            Response::Success(data) => {
                println!("{}", self.render(&data)?);
                Ok(ExitCode::SUCCESS)
            }
            Response::Error(err) => {
                eprintln!("{}", self.render(&err)?);
                Ok(ExitCode::FAILURE)
            }
        }
    }

    fn render<V: Serialize>(&self, value: &V) -> Result<String> {
        let rendered = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_file(server: &MockServer) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "xml2_base_url: {uri}/xmlapi2\nsite_base_url: {uri}\nhttp:\n  max_retries: 0\n  rate_limit:\n    enabled: false\n",
            uri = server.uri()
        )
        .unwrap();
        file
    }

    fn runner(config: &tempfile::NamedTempFile, args: &[&str]) -> Runner {
        let path = config.path().to_string_lossy().into_owned();
        let mut argv = vec!["bgg", "--config", path.as_str()];
        argv.extend_from_slice(args);
        Runner::new(Cli::parse_from(argv))
    }

    #[tokio::test]
    async fn test_error_response_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/xmlapi2/hot"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<error/>"))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_file(&server);
        // Printed once as JSON by the runner; nothing left for main to report
        let code = runner(&config, &["hot"]).run().await.unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_sitemap_diffuse_command() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sitemapindex"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<sitemapindex/>"))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_file(&server);
        let code = runner(&config, &["sitemap-diffuse", "--type", "board-games"])
            .run()
            .await
            .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_unreadable_config_is_an_error() {
        let cli = Cli::parse_from(["bgg", "--config", "/definitely/not/here.yaml", "hot"]);
        assert!(Runner::new(cli).run().await.is_err());
    }
}
