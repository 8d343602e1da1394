//! leetcode.cn GraphQL 查询语句

pub(crate) const USER_PROFILE: &str = r"
query userProfilePublicProfile($userSlug: String!) {
  userProfilePublicProfile(userSlug: $userSlug) {
    haveFollowed
    siteRanking
    profile {
      userSlug
      realName
      aboutMe
      asciiCode
      userAvatar
      gender
      websites
      skillTags
      ipRegion
      birthday
      location
      useDefaultAvatar
      certificationLevel
      github
      school: schoolV2 {
        schoolId
        logo
        name
      }
      company: companyV2 {
        id
        logo
        name
      }
      job
      globalLocation {
        country
        province
        city
        overseasCity
      }
      socialAccounts {
        provider
        profileUrl
      }
    }
    educationRecordList {
      unverifiedOrganizationName
    }
    occupationRecordList {
      unverifiedOrganizationName
      jobTitle
    }
  }
  userProfileUserQuestionProgress(userSlug: $userSlug) {
    numAcceptedQuestions {
      difficulty
      count
    }
    numFailedQuestions {
      difficulty
      count
    }
    numUntouchedQuestions {
      difficulty
      count
    }
  }
}";

pub(crate) const USER_STATUS: &str = r"
query userStatus {
  userStatus {
    isSignedIn
    isPremium
    username
    realName
    avatar
    userSlug
    isAdmin
    checkedInToday
    useTranslation
    premiumExpiredAt
    isTranslator
    isSuperuser
    isPhoneVerified
    isVerified
  }
}";

pub(crate) const SUBMISSION_LIST: &str = r"
query submissionList(
  $offset: Int!
  $limit: Int!
  $lastKey: String
  $questionSlug: String
  $lang: String
  $status: SubmissionStatusEnum
) {
  submissionList(
    offset: $offset
    limit: $limit
    lastKey: $lastKey
    questionSlug: $questionSlug
    lang: $lang
    status: $status
  ) {
    lastKey
    hasNext
    submissions {
      id
      title
      status
      statusDisplay
      lang
      langName: langVerboseName
      runtime
      timestamp
      url
      isPending
      memory
      frontendId
      submissionComment {
        comment
        flagType
      }
    }
  }
}";

pub(crate) const RECENT_AC_SUBMISSIONS: &str = r"
query recentAcSubmissions($userSlug: String!) {
  recentACSubmissions(userSlug: $userSlug) {
    submissionId
    submitTime
    question {
      title
      translatedTitle
      titleSlug
      questionFrontendId
    }
  }
}";

pub(crate) const SUBMISSION_DETAIL: &str = r"
query submissionDetails($submissionId: ID!) {
  submissionDetail(submissionId: $submissionId) {
    id
    code
    timestamp
    statusDisplay
    isMine
    runtimeDisplay: runtime
    memoryDisplay: memory
    memory: rawMemory
    lang
    langVerboseName
    question {
      questionId
      titleSlug
      hasFrontendPreview
    }
    user {
      realName
      userAvatar
      userSlug
    }
    runtimePercentile
    memoryPercentile
    submissionComment {
      flagType
    }
    passedTestCaseCnt
    totalTestCaseCnt
    fullCodeOutput
    testDescriptions
    testInfo
    testBodies
    stdOutput
    ... on GeneralSubmissionNode {
      outputDetail {
        codeOutput
        expectedOutput
        input
        compileError
        runtimeError
        lastTestcase
      }
    }
  }
}";

pub(crate) const CONTEST_RANKING: &str = r"
query userContestRankingInfo($userSlug: String!) {
  userContestRanking(userSlug: $userSlug) {
    attendedContestsCount
    rating
    globalRanking
    localRanking
    globalTotalParticipants
    localTotalParticipants
    topPercentage
  }
  userContestRankingHistory(userSlug: $userSlug) {
    attended
    totalProblems
    trendingDirection
    finishTimeInSeconds
    rating
    score
    ranking
    contest {
      title
      titleCn
      startTime
    }
  }
}";

pub(crate) const DAILY_CHALLENGE: &str = r"
query questionOfToday {
  todayRecord {
    date
    userStatus
    question {
      questionId
      frontendQuestionId: questionFrontendId
      difficulty
      title
      titleCn: translatedTitle
      titleSlug
      paidOnly: isPaidOnly
      freqBar
      isFavor
      acRate
      status
      solutionNum
      hasVideoSolution
      topicTags {
        name
        nameTranslated: translatedName
        id
      }
    }
    lastSubmission {
      id
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
    translatedTitle
    content
    translatedContent
    difficulty
    likes
    dislikes
    isPaidOnly
    topicTags {
      name
      slug
      translatedName
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

pub(crate) const PROBLEM_SEARCH: &str = r"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList(
    categorySlug: $categorySlug
    limit: $limit
    skip: $skip
    filters: $filters
  ) {
    hasMore
    total
    questions {
      acRate
      difficulty
      freqBar
      frontendQuestionId
      isFavor
      paidOnly
      solutionNum
      status
      title
      titleCn
      titleSlug
      topicTags {
        name
        nameTranslated
        id
        slug
      }
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

/// `orderBy` 可选值：DEFAULT, MOST_UPVOTE, HOT, NEWEST_TO_OLDEST, OLDEST_TO_NEWEST
pub(crate) const SOLUTION_ARTICLES: &str = r"
query questionTopicsList(
  $questionSlug: String!
  $skip: Int
  $first: Int
  $orderBy: SolutionArticleOrderBy
  $userInput: String
  $tagSlugs: [String!]
) {
  questionSolutionArticles(
    questionSlug: $questionSlug
    skip: $skip
    first: $first
    orderBy: $orderBy
    userInput: $userInput
    tagSlugs: $tagSlugs
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
        canSee
        upvoteCount
        hitCount
        createdAt
        tags {
          name
          nameTranslated
          slug
          tagType
        }
        author {
          username
          profile {
            userAvatar
            userSlug
            realName
          }
        }
        topic {
          id
          commentCount
          viewCount
        }
      }
    }
  }
}";

pub(crate) const SOLUTION_ARTICLE_DETAIL: &str = r"
query discussTopic($slug: String) {
  solutionArticle(slug: $slug, orderBy: DEFAULT) {
    uuid
    title
    content
    slug
    canSee
    summary
    createdAt
    hitCount
    tags {
      name
      nameTranslated
      slug
      tagType
    }
    author {
      username
      profile {
        userAvatar
        userSlug
        realName
      }
    }
    topic {
      id
      commentCount
      viewCount
    }
    question {
      titleSlug
      questionFrontendId
    }
    next {
      slug
      title
    }
    prev {
      slug
      title
    }
  }
}";

pub(crate) const NOTE_AGGREGATE: &str = r"
query noteAggregateNote(
  $aggregateType: AggregateNoteEnum!
  $keyword: String
  $orderBy: AggregateNoteSortingOrderEnum
  $limit: Int = 100
  $skip: Int = 0
) {
  noteAggregateNote(
    aggregateType: $aggregateType
    keyword: $keyword
    orderBy: $orderBy
    limit: $limit
    skip: $skip
  ) {
    count
    userNotes {
      id
      summary
      content
      ... on NoteAggregateQuestionNoteNode {
        noteQuestion {
          linkTemplate
          questionId
          title
          translatedTitle
        }
      }
    }
  }
}";

pub(crate) const NOTE_BY_QUESTION_ID: &str = r"
query noteOneTargetCommonNote(
  $noteType: NoteCommonTypeEnum!
  $questionId: String!
  $limit: Int = 20
  $skip: Int = 0
) {
  noteOneTargetCommonNote(
    noteType: $noteType
    targetId: $questionId
    limit: $limit
    skip: $skip
  ) {
    count
    userNotes {
      id
      summary
      content
    }
  }
}";

pub(crate) const NOTE_CREATE: &str = r"
mutation noteCreateCommonNote(
  $content: String!
  $noteType: NoteCommonTypeEnum!
  $targetId: String!
  $summary: String!
) {
  noteCreateCommonNote(
    data: { content: $content, noteType: $noteType, targetId: $targetId, summary: $summary }
  ) {
    ok
    note {
      id
      content
      targetId
    }
  }
}";

pub(crate) const NOTE_UPDATE: &str = r"
mutation noteUpdateUserNote($noteId: ID!, $content: String!, $summary: String!) {
  noteUpdateUserNote(content: $content, noteId: $noteId, summary: $summary) {
    ok
    note {
      id
      content
      targetId
    }
  }
}";
