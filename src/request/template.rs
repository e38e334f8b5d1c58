//! Group events query document

/// Path of the GraphQL endpoint, relative to the API base URL
pub const GQL_PATH: &str = "gql";

/// Maximum number of events the API returns per page
pub const PAGE_LIMIT: u32 = 20;

/// Query listing the unified events of a group, one page at a time.
///
/// Variables: `$urlname` (group), `$itemsNum` (page size) and the optional
/// `$cursor` returned as `pageInfo.endCursor` by the previous page.
pub const GROUP_EVENTS_QUERY: &str = r"
query($urlname: String!, $itemsNum: Int!, $cursor: String) {
  groupByUrlname(urlname: $urlname) {
    unifiedEvents(input: {first: $itemsNum, after: $cursor}) {
      count
      pageInfo {
        endCursor
      }
      edges {
        node {
          id
          title
          description
          dateTime
          endTime
          eventUrl
          createdAt
          status
          topics {
            count
            pageInfo {
              endCursor
            }
            edges {
              node {
                name
              }
            }
          }
        }
      }
    }
  }
}
";
