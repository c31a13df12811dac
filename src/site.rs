use std::io;

use chrono::Utc;
use serde::Serialize;
use spdlog::info;

use crate::config::Config;
use crate::content::collection_loader::CollectionLoader;
use crate::content::{Collection, Post, PostData, Project, ProjectData};
use crate::content_filter::ContentFilter;
use crate::paginator::{get_pagination, Page, PageRequest};
use crate::sorted_content::{get_by_tag, get_sorted_content};
use crate::tags::{get_unique_tags, Tag};
use crate::view::card::{Card, ProjectCard};
use crate::view::feed::{build_feed, Feed};
use crate::view::robots::render_robots;
use crate::view::social_image::{social_image_paths, SocialImagePath};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPage {
    pub featured: Vec<Card>,
    pub recent: CardPage,
}

/// A listing page: the pagination result with its entries turned into cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPage {
    pub total_pages: usize,
    pub current_page: usize,
    pub cards: Vec<Card>,
}

impl CardPage {
    fn from_page(page: Page<'_, &Post>, with_badge: bool) -> CardPage {
        CardPage {
            total_pages: page.total_pages,
            current_page: page.current_page,
            cards: page.paginated_content.iter().map(|p| Card::from_post(p, with_badge)).collect(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.current_page == 0
    }
}

/// The loaded collections and the configuration that drives every page.
pub struct Site {
    pub config: Config,
    pub blog: Vec<Post>,
    pub notes: Vec<Post>,
    pub snippets: Vec<Post>,
    pub projects: Vec<Project>,
}

impl Site {
    pub fn load(config: Config) -> io::Result<Site> {
        let content_dir = config.paths.content_dir.clone();
        info!("Loading content from {}", content_dir.display());

        let author = config.site.author.as_str();
        let blog = with_default_author(CollectionLoader::new(&content_dir, Collection::Blog).load::<PostData>()?, author);
        let notes = with_default_author(CollectionLoader::new(&content_dir, Collection::Note).load::<PostData>()?, author);
        let snippets = with_default_author(CollectionLoader::new(&content_dir, Collection::Snippet).load::<PostData>()?, author);
        let projects = CollectionLoader::new(&content_dir, Collection::Project).load::<ProjectData>()?;

        Ok(Site {
            config,
            blog,
            notes,
            snippets,
            projects,
        })
    }

    /// A filter anchored at the current instant. Build one per request and
    /// hand it to every call that serves that request.
    pub fn filter(&self) -> ContentFilter {
        ContentFilter::from_config(&self.config.defaults, Utc::now())
    }

    pub fn posts(&self, collection: Collection) -> &[Post] {
        match collection {
            Collection::Blog => &self.blog,
            Collection::Note => &self.notes,
            Collection::Snippet => &self.snippets,
            Collection::Project => &[],
        }
    }

    fn page_size(&self, collection: Collection) -> usize {
        match collection {
            Collection::Note | Collection::Snippet => self.config.defaults.note_per_page,
            Collection::Blog | Collection::Project => self.config.defaults.post_per_page,
        }
    }

    /// Featured blog posts, then the newest non-featured ones.
    pub fn index(&self, filter: &ContentFilter) -> IndexPage {
        let sorted = get_sorted_content(&self.blog, filter);
        let (featured, recent): (Vec<&Post>, Vec<&Post>) = sorted
            .into_iter()
            .partition(|post| post.data.featured.unwrap_or(false));

        let recent = get_pagination(&recent, PageRequest::Missing, true, self.config.defaults.post_per_index);
        IndexPage {
            featured: featured.iter().map(|p| Card::from_post(p, false)).collect(),
            recent: CardPage::from_page(recent, false),
        }
    }

    pub fn listing(&self, collection: Collection, page: PageRequest, filter: &ContentFilter) -> CardPage {
        let sorted = get_sorted_content(self.posts(collection), filter);
        let page = get_pagination(&sorted, page, false, self.page_size(collection));
        CardPage::from_page(page, false)
    }

    pub fn tags(&self, filter: &ContentFilter) -> Vec<Tag> {
        get_unique_tags(self.blog.iter().chain(self.notes.iter()), filter)
    }

    pub fn tag_page(&self, collection: Collection, tag: &str, page: PageRequest, filter: &ContentFilter) -> CardPage {
        let tagged = get_by_tag(self.posts(collection), tag, filter);
        let page = get_pagination(&tagged, page, false, self.page_size(collection));
        CardPage::from_page(page, false)
    }

    /// Published projects, featured ones first.
    pub fn projects(&self) -> Vec<ProjectCard> {
        let mut visible: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| !p.data.draft.unwrap_or(false))
            .collect();
        visible.sort_by_key(|p| !p.data.featured.unwrap_or(false));
        visible.into_iter().map(ProjectCard::from_project).collect()
    }

    pub fn feed(&self, filter: &ContentFilter) -> Feed {
        build_feed(&self.config.site, &self.blog, &self.notes, filter)
    }

    pub fn social_images(&self, collection: Collection) -> Vec<SocialImagePath<'_>> {
        social_image_paths(self.posts(collection))
    }

    pub fn robots(&self) -> String {
        render_robots(&self.config.site.website)
    }
}

fn with_default_author(mut posts: Vec<Post>, author: &str) -> Vec<Post> {
    for post in posts.iter_mut() {
        if post.data.author.is_none() {
            post.data.author = Some(author.to_string());
        }
    }
    posts
}
