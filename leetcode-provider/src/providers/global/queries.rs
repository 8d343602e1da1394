//! leetcode.com GraphQL 查询语句

pub(crate) const USER_PROFILE: &str = r"
query getUserProfile($username: String!) {
  allQuestionsCount {
    difficulty
    count
  }
  matchedUser(username: $username) {
    username
    githubUrl
    twitterUrl
    linkedinUrl
    contributions {
      points
      questionCount
      testcaseCount
    }
    profile {
      realName
      userAvatar
      birthday
      ranking
      reputation
      websites
      countryName
      company
      school
      skillTags
      aboutMe
      starRating
    }
    badges {
      id
      displayName
      icon
      creationDate
    }
    submitStats {
      acSubmissionNum {
        difficulty
        count
        submissions
      }
      totalSubmissionNum {
        difficulty
        count
        submissions
      }
    }
  }
}";

pub(crate) const USER_STATUS: &str = r"
query globalData {
  userStatus {
    userId
    isSignedIn
    isPremium
    isVerified
    username
    realName
    avatar
    isAdmin
    isSuperuser
    activeSessionId
    checkedInToday
    notificationStatus {
      lastModified
      numUnread
    }
  }
}";

pub(crate) const SUBMISSION_LIST: &str = r"
query submissionList($offset: Int!, $limit: Int!, $lastKey: String, $questionSlug: String) {
  submissionList(offset: $offset, limit: $limit, lastKey: $lastKey, questionSlug: $questionSlug) {
    lastKey
    hasNext
    submissions {
      id
      title
      titleSlug
      status
      statusDisplay
      lang
      langName
      runtime
      timestamp
      url
      isPending
      memory
    }
  }
}";

pub(crate) const RECENT_SUBMISSIONS: &str = r"
query recentSubmissions($username: String!, $limit: Int) {
  recentSubmissionList(username: $username, limit: $limit) {
    id
    title
    titleSlug
    timestamp
    statusDisplay
    lang
  }
}";

pub(crate) const RECENT_AC_SUBMISSIONS: &str = r"
query recentAcSubmissions($username: String!, $limit: Int) {
  recentAcSubmissionList(username: $username, limit: $limit) {
    id
    title
    titleSlug
    time
    timestamp
    statusDisplay
    lang
  }
}";

pub(crate) const SUBMISSION_DETAIL: &str = r"
query submissionDetails($id: Int!) {
  submissionDetails(submissionId: $id) {
    id
    runtime
    runtimeDisplay
    runtimePercentile
    memory
    memoryDisplay
    memoryPercentile
    code
    timestamp
    statusCode
    lang {
      name
      verboseName
    }
    question {
      questionId
      titleSlug
    }
    notes
    topicTags {
      tagId
      slug
      name
    }
    runtimeError
    compileError
    lastTestcase
    totalCorrect
    totalTestcases
  }
}";

pub(crate) const CONTEST_RANKING: &str = r"
query userContestRankingInfo($username: String!) {
  userContestRanking(username: $username) {
    attendedContestsCount
    rating
    globalRanking
    totalParticipants
    topPercentage
    badge {
      name
    }
  }
  userContestRankingHistory(username: $username) {
    attended
    trendDirection
    problemsSolved
    totalProblems
    finishTimeInSeconds
    rating
    ranking
    contest {
      title
      startTime
    }
  }
}";

pub(crate) const DAILY_CHALLENGE: &str = r"
query questionOfToday {
  activeDailyCodingChallengeQuestion {
    date
    link
    question {
      questionId
      questionFrontendId
      title
      titleSlug
      difficulty
      content
      isPaidOnly
      acRate
      topicTags {
        name
        slug
      }
      codeSnippets {
        lang
        langSlug
        code
      }
      hints
    }
  }
}";

pub(crate) const PROBLEM: &str = r"
query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    title
    titleSlug
    content
    difficulty
    likes
    dislikes
    isPaidOnly
    topicTags {
      name
      slug
    }
    codeSnippets {
      lang
      langSlug
      code
    }
    exampleTestcases
    sampleTestCase
    hints
    similarQuestions
    stats
    metaData
  }
}";

/// 通过别名与 CN 站点的 `{total, hasMore, questions}` 结构对齐
pub(crate) const PROBLEM_SEARCH: &str = r"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    limit: $limit
    skip: $skip
    filters: $filters
  ) {
    total: totalNum
    questions: data {
      acRate
      difficulty
      freqBar
      questionFrontendId
      isFavor
      isPaidOnly
      status
      title
      titleSlug
      topicTags {
        name
        id
        slug
      }
      hasSolution
      hasVideoSolution
    }
  }
}";

pub(crate) const PROGRESS_QUESTION_LIST: &str = r"
query userProgressQuestionList($filters: UserProgressQuestionListInput) {
  userProgressQuestionList(filters: $filters) {
    totalNum
    questions {
      translatedTitle
      frontendId
      title
      titleSlug
      difficulty
      lastSubmittedAt
      numSubmitted
      questionStatus
      lastResult
      topicTags {
        name
        nameTranslated
        slug
      }
    }
  }
}";

/// `orderBy` 可选值：HOT, MOST_RECENT, MOST_VOTES
pub(crate) const SOLUTION_ARTICLES: &str = r"
query ugcArticleSolutionArticles(
  $questionSlug: String!
  $orderBy: ArticleOrderByEnum
  $userInput: String
  $tagSlugs: [String!]
  $skip: Int
  $first: Int
) {
  ugcArticleSolutionArticles(
    questionSlug: $questionSlug
    orderBy: $orderBy
    userInput: $userInput
    tagSlugs: $tagSlugs
    skip: $skip
    first: $first
  ) {
    totalNum
    pageInfo {
      hasNextPage
    }
    edges {
      node {
        uuid
        title
        slug
        summary
        author {
          realName
          userAvatar
          userSlug
          userName
        }
        articleType
        createdAt
        updatedAt
        canSee
        topicId
        hitCount
        reactions {
          count
          reactionType
        }
        tags {
          name
          slug
          tagType
        }
        topic {
          id
          topLevelCommentCount
        }
      }
    }
  }
}";

pub(crate) const SOLUTION_ARTICLE_DETAIL: &str = r"
query ugcArticleSolutionArticle($topicId: ID) {
  ugcArticleSolutionArticle(topicId: $topicId) {
    uuid
    title
    slug
    summary
    author {
      realName
      userAvatar
      userSlug
      userName
    }
    createdAt
    canSee
    topicId
    hitCount
    tags {
      name
      slug
      tagType
    }
    content
    prev {
      uuid
      slug
      topicId
      title
    }
    next {
      uuid
      slug
      topicId
      title
    }
  }
}";
